//! The font store interface consumed by the validators.

use std::path::Path;

use crate::{Glyph, MathConstants, Result};

/// Addressable, mutable access to a font's glyphs and math metadata.
///
/// Lookups by code point return `None` for absent glyphs; callers branch on
/// that instead of testing containment first.
pub trait FontStore {
    /// Load a store from disk.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Persist the store to disk.
    fn save(&self, path: &Path) -> Result<()>;

    fn units_per_em(&self) -> u16;

    /// Default rule thickness, used for bars and radicals.
    fn default_stroke_width(&self) -> i32;

    fn x_height(&self) -> i32;

    fn glyph(&self, codepoint: u32) -> Option<&Glyph>;

    fn glyph_mut(&mut self, codepoint: u32) -> Option<&mut Glyph>;

    fn glyph_by_name(&self, name: &str) -> Option<&Glyph>;

    fn contains(&self, codepoint: u32) -> bool {
        self.glyph(codepoint).is_some()
    }

    fn has_math_table(&self) -> bool {
        self.math_constants().is_some()
    }

    /// The math constants, or `None` when the font has no math table.
    fn math_constants(&self) -> Option<&MathConstants>;

    /// Mutable math constants, creating an empty table when missing.
    fn math_constants_mut(&mut self) -> &mut MathConstants;

    /// Create an empty math table if there is none. Returns whether one was created.
    fn create_math_table(&mut self) -> bool {
        let created = !self.has_math_table();
        self.math_constants_mut();
        created
    }

    /// Copy the glyph named `source` into a new unencoded glyph `new_name`.
    fn duplicate_glyph(&mut self, source: &str, new_name: &str) -> Result<&mut Glyph>;

    /// Add a glyph, encoding it at `glyph.codepoint` when set.
    fn insert_glyph(&mut self, glyph: Glyph) -> Result<()>;
}

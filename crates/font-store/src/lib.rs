//! # Math font store
//!
//! A mutable, in-memory font model for checking and repairing OpenType MATH
//! data: glyph boxes and outlines, size variants, glyph assemblies, italic
//! corrections and the MATH constants.
//!
//! Models are stored as JSON. TrueType/OpenType binaries can be imported
//! (read-only) through `read-fonts`.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use math_font_store::{FontStore, MathFont};
//!
//! let font = MathFont::open(Path::new("font.ttf")).unwrap();
//! let plus = font.glyph(u32::from('+')).map(|g| g.bbox());
//! font.save(Path::new("font.json")).unwrap();
//! ```

mod constants;
mod error;
mod font;
mod geometry;
mod glyph;
pub mod opentype;
mod store;

pub use constants::{MathConstant, MathConstants, ZeroPolicy};
pub use error::{Error, Result};
pub use font::MathFont;
pub use geometry::{Axis, BoundingBox, Contour, OutlinePoint};
pub use glyph::{Assembly, Glyph, Part, VariantList};
pub use store::FontStore;

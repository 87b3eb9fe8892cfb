//! The in-memory font model.

use std::{
    collections::BTreeMap,
    fs::{read, write},
    path::Path,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, FontStore, Glyph, MathConstants, Result, opentype};

/// Serialized form of [`MathFont`]: glyphs as an ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FontModel {
    units_per_em: u16,
    default_stroke_width: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    math: Option<MathConstants>,
    glyphs: Vec<Glyph>,
    /// Code points mapped to a glyph other than through its own `codepoint`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    aliases: BTreeMap<u32, String>,
}

/// A mutable font model addressable by code point and glyph name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FontModel", into = "FontModel")]
pub struct MathFont {
    units_per_em: u16,
    default_stroke_width: i32,
    x_height: Option<i32>,
    math: Option<MathConstants>,
    glyphs: IndexMap<String, Glyph>,
    cmap: BTreeMap<u32, String>,
}

impl MathFont {
    pub fn new(units_per_em: u16, default_stroke_width: i32) -> Self {
        Self {
            units_per_em,
            default_stroke_width,
            x_height: None,
            math: None,
            glyphs: IndexMap::new(),
            cmap: BTreeMap::new(),
        }
    }

    /// Set the x-height instead of measuring the `x` glyph.
    pub fn with_x_height(mut self, x_height: i32) -> Self {
        self.x_height = Some(x_height);
        self
    }

    pub fn with_math_constants(mut self, constants: MathConstants) -> Self {
        self.math = Some(constants);
        self
    }

    /// Read a font model from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Map an additional code point to an existing glyph.
    pub fn encode(&mut self, codepoint: u32, name: &str) -> Result<()> {
        if !self.glyphs.contains_key(name) {
            return Err(Error::UnknownGlyph(name.to_string()));
        }
        if self.cmap.contains_key(&codepoint) {
            return Err(Error::DuplicateCodepoint(codepoint));
        }
        self.cmap.insert(codepoint, name.to_string());
        Ok(())
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl TryFrom<FontModel> for MathFont {
    type Error = Error;

    fn try_from(model: FontModel) -> Result<Self> {
        let mut font = Self::new(model.units_per_em, model.default_stroke_width);
        font.x_height = model.x_height;
        font.math = model.math;
        for glyph in model.glyphs {
            font.insert_glyph(glyph)?;
        }
        for (codepoint, name) in &model.aliases {
            font.encode(*codepoint, name)?;
        }
        Ok(font)
    }
}

impl From<MathFont> for FontModel {
    fn from(font: MathFont) -> Self {
        let aliases = font
            .cmap
            .iter()
            .filter(|(cp, name)| {
                font.glyphs.get(name.as_str()).and_then(|g| g.codepoint) != Some(**cp)
            })
            .map(|(cp, name)| (*cp, name.clone()))
            .collect();
        Self {
            units_per_em: font.units_per_em,
            default_stroke_width: font.default_stroke_width,
            x_height: font.x_height,
            math: font.math,
            glyphs: font.glyphs.into_values().collect(),
            aliases,
        }
    }
}

impl FontStore for MathFont {
    fn open(path: &Path) -> Result<Self> {
        let data = read(path).map_err(|source| Error::Read { path: path.into(), source })?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json(&data),
            "ttf" | "otf" => opentype::import(&data),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        write(path, json).map_err(|source| Error::Write { path: path.into(), source })
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn default_stroke_width(&self) -> i32 {
        self.default_stroke_width
    }

    fn x_height(&self) -> i32 {
        self.x_height
            .or_else(|| self.glyph(u32::from('x')).map(|g| g.bbox.y_max))
            .unwrap_or(0)
    }

    fn glyph(&self, codepoint: u32) -> Option<&Glyph> {
        self.cmap.get(&codepoint).and_then(|name| self.glyphs.get(name))
    }

    fn glyph_mut(&mut self, codepoint: u32) -> Option<&mut Glyph> {
        let name = self.cmap.get(&codepoint)?;
        self.glyphs.get_mut(name)
    }

    fn glyph_by_name(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }

    fn math_constants(&self) -> Option<&MathConstants> {
        self.math.as_ref()
    }

    fn math_constants_mut(&mut self) -> &mut MathConstants {
        self.math.get_or_insert_with(MathConstants::new)
    }

    fn duplicate_glyph(&mut self, source: &str, new_name: &str) -> Result<&mut Glyph> {
        if self.glyphs.contains_key(new_name) {
            return Err(Error::DuplicateGlyph(new_name.to_string()));
        }
        let source = self.glyphs.get(source).ok_or_else(|| Error::UnknownGlyph(source.into()))?;

        let mut copy = Glyph::new(new_name, None, source.bbox)
            .with_advance_width(source.advance_width)
            .with_contours(source.contours.clone());
        copy.italic_correction = source.italic_correction;

        let (index, _) = self.glyphs.insert_full(new_name.to_string(), copy);
        Ok(&mut self.glyphs[index])
    }

    fn insert_glyph(&mut self, glyph: Glyph) -> Result<()> {
        if self.glyphs.contains_key(&glyph.name) {
            return Err(Error::DuplicateGlyph(glyph.name));
        }
        if let Some(codepoint) = glyph.codepoint {
            if self.cmap.contains_key(&codepoint) {
                return Err(Error::DuplicateCodepoint(codepoint));
            }
            self.cmap.insert(codepoint, glyph.name.clone());
        }
        self.glyphs.insert(glyph.name.clone(), glyph);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, BoundingBox, MathConstant};

    fn sample_font() -> MathFont {
        let mut font = MathFont::new(1000, 50);
        font.insert_glyph(Glyph::new("plus", Some(0x2B), BoundingBox::new(50, 0, 550, 500)))
            .unwrap();
        font.insert_glyph(Glyph::new("x", Some(0x78), BoundingBox::new(0, 0, 500, 450))).unwrap();
        font
    }

    #[test]
    fn test_lookup_by_codepoint_and_name() {
        let font = sample_font();
        assert_eq!(font.glyph(0x2B).map(|g| g.name.as_str()), Some("plus"));
        assert!(font.glyph(0x2C).is_none());
        assert!(font.glyph_by_name("x").is_some());
        assert!(font.contains(0x78));
    }

    #[test]
    fn test_x_height_falls_back_to_x_glyph() {
        assert_eq!(sample_font().x_height(), 450);
        assert_eq!(sample_font().with_x_height(480).x_height(), 480);
    }

    #[test]
    fn test_math_table_created_on_demand() {
        let mut font = sample_font();
        assert!(!font.has_math_table());
        font.math_constants_mut().set(MathConstant::AxisHeight, 250);
        assert!(font.has_math_table());
    }

    #[test]
    fn test_duplicate_glyph_is_unencoded() {
        let mut font = sample_font();
        font.glyph_mut(0x2B).unwrap().set_variant_list(Axis::Vertical, vec!["plus".into()]);

        let copy = font.duplicate_glyph("plus", "plus.display").unwrap();
        assert_eq!(copy.codepoint, None);
        assert!(copy.variants().is_none());

        assert!(matches!(font.duplicate_glyph("plus", "x"), Err(Error::DuplicateGlyph(_))));
        assert!(matches!(font.duplicate_glyph("nope", "nope.1"), Err(Error::UnknownGlyph(_))));
    }

    #[test]
    fn test_rejects_duplicate_codepoint() {
        let mut font = sample_font();
        let result = font.insert_glyph(Glyph::new("plus.alt", Some(0x2B), BoundingBox::default()));
        assert!(matches!(result, Err(Error::DuplicateCodepoint(0x2B))));
    }

    #[test]
    fn test_json_preserves_glyph_order() {
        let mut font = sample_font();
        font.math_constants_mut().set(MathConstant::AxisHeight, 250);

        font.encode(0x2795, "plus").unwrap();

        let json = font.to_json().unwrap();
        let reloaded = MathFont::from_json(json.as_bytes()).unwrap();

        assert_eq!(reloaded, font);
        let names: Vec<_> = reloaded.glyphs().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["plus", "x"]);
        assert_eq!(reloaded.glyph(0x2795).map(|g| g.name.as_str()), Some("plus"));
    }
}

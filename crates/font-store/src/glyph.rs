//! Glyph records and their stretchy-construction data.

use kurbo::Affine;
use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, BoundingBox, Contour};

/// One piece of a glyph assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub glyph: String,
    pub is_extender: bool,
    pub start_connector_length: i32,
    pub end_connector_length: i32,
    pub full_advance: i32,
}

/// Size variants of a glyph, smallest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantList {
    pub axis: Axis,
    pub glyphs: Vec<String>,
}

/// Parts used to build a glyph at an arbitrary size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assembly {
    pub axis: Axis,
    pub parts: Vec<Part>,
}

/// A glyph of the font model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codepoint: Option<u32>,
    pub bbox: BoundingBox,
    #[serde(default)]
    pub advance_width: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contours: Vec<Contour>,
    /// `None` is the "unspecified" value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic_correction: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variants: Option<VariantList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assembly: Option<Assembly>,
    /// Identifiers of the substitution subtables that cover this glyph.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<String>,
}

impl Glyph {
    pub fn new(name: impl Into<String>, codepoint: Option<u32>, bbox: BoundingBox) -> Self {
        Self {
            name: name.into(),
            codepoint,
            bbox,
            advance_width: bbox.x_max.max(0),
            contours: Vec::new(),
            italic_correction: None,
            variants: None,
            assembly: None,
            substitutions: Vec::new(),
        }
    }

    pub fn with_advance_width(mut self, advance_width: i32) -> Self {
        self.advance_width = advance_width;
        self
    }

    pub fn with_contours(mut self, contours: Vec<Contour>) -> Self {
        self.contours = contours;
        self
    }

    pub fn with_italic_correction(mut self, value: i32) -> Self {
        self.italic_correction = Some(value);
        self
    }

    pub fn with_substitution(mut self, subtable: impl Into<String>) -> Self {
        self.substitutions.push(subtable.into());
        self
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Variant glyph names for `axis`, if this glyph stretches along it.
    pub fn variant_list(&self, axis: Axis) -> Option<&[String]> {
        self.variants.as_ref().filter(|v| v.axis == axis).map(|v| v.glyphs.as_slice())
    }

    /// The variant list regardless of axis.
    pub fn variants(&self) -> Option<&VariantList> {
        self.variants.as_ref()
    }

    /// Replace the variant list; a list on the other axis is dropped.
    pub fn set_variant_list(&mut self, axis: Axis, glyphs: Vec<String>) {
        self.variants = Some(VariantList { axis, glyphs });
    }

    pub fn assembly(&self, axis: Axis) -> Option<&[Part]> {
        self.assembly.as_ref().filter(|a| a.axis == axis).map(|a| a.parts.as_slice())
    }

    pub fn set_assembly(&mut self, axis: Axis, parts: Vec<Part>) {
        self.assembly = Some(Assembly { axis, parts });
    }

    pub fn substitution_subtables(&self) -> impl Iterator<Item = &str> {
        self.substitutions.iter().map(String::as_str)
    }

    /// Apply an affine transform to the outline, box and advance.
    ///
    /// Coordinates are rounded to the grid.
    pub fn transform(&mut self, affine: Affine) {
        self.contours = self.contours.iter().map(|c| c.transform(affine)).collect();
        self.bbox = self.bbox.transform(affine);
        let [xx, ..] = affine.as_coeffs();
        self.advance_width = (self.advance_width as f64 * xx).round() as i32;
    }
}

//! Small in-memory fonts for unit tests.

use math_font_store::{BoundingBox, FontStore, Glyph, MathFont};

use crate::config::BASIC_LATIN;

/// A font mapping all of Basic Latin, with a stroke width of 50.
///
/// `+` spans 0..500 vertically, `O` is 720 units tall and `x` 450.
pub fn basic_latin_font(units_per_em: u16) -> MathFont {
    let mut font = MathFont::new(units_per_em, 50);
    for codepoint in BASIC_LATIN {
        let bbox = match char::from_u32(codepoint) {
            Some('+') => BoundingBox::new(50, 0, 550, 500),
            Some('O') => BoundingBox::new(30, -10, 670, 710),
            Some('x') => BoundingBox::new(0, 0, 500, 450),
            Some(' ') => BoundingBox::default(),
            _ => BoundingBox::new(40, 0, 460, 700),
        };
        add_glyph(&mut font, codepoint, bbox);
    }
    font
}

/// Add a glyph named `uniXXXX` at `codepoint`.
pub fn add_glyph(font: &mut MathFont, codepoint: u32, bbox: BoundingBox) {
    font.insert_glyph(Glyph::new(format!("uni{codepoint:04X}"), Some(codepoint), bbox)).unwrap();
}

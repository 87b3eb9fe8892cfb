//! Stretchy constructions for common delimiters, arrows and bars.
//!
//! Based on the Unicode construction list used by Gecko's MathML layout
//! (`mathfontUnicode.properties`).

use math_font_store::Axis;

const H: Axis = Axis::Horizontal;
const V: Axis = Axis::Vertical;

/// An assembly piece: code point and whether it is an extender.
pub type PartSpec = (u32, bool);

/// How a base character is drawn at larger sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Construction {
    pub codepoint: u32,
    pub axis: Axis,
    /// Pre-drawn size variants, smallest first, not including the base.
    pub variants: Option<&'static [u32]>,
    /// Assembly pieces, bottom to top or left to right.
    pub parts: Option<&'static [PartSpec]>,
}

impl Construction {
    const fn parts(codepoint: u32, axis: Axis, parts: &'static [PartSpec]) -> Self {
        Self { codepoint, axis, variants: None, parts: Some(parts) }
    }

    const fn variants(codepoint: u32, axis: Axis, variants: &'static [u32]) -> Self {
        Self { codepoint, axis, variants: Some(variants), parts: None }
    }

    const fn both(
        codepoint: u32,
        axis: Axis,
        variants: &'static [u32],
        parts: &'static [PartSpec],
    ) -> Self {
        Self { codepoint, axis, variants: Some(variants), parts: Some(parts) }
    }
}

const E: bool = true;
const F: bool = false;

pub const CONSTRUCTIONS: &[Construction] = &[
    // Brackets
    Construction::parts(0x0028, V, &[(0x239D, F), (0x239C, E), (0x239B, F)]),
    Construction::parts(0x0029, V, &[(0x23A0, F), (0x239F, E), (0x239E, F)]),
    Construction::parts(0x005B, V, &[(0x23A3, F), (0x23A2, E), (0x23A1, F)]),
    Construction::parts(0x005D, V, &[(0x23A6, F), (0x23A5, E), (0x23A4, F)]),
    Construction::parts(
        0x007B,
        V,
        &[(0x23A9, F), (0x23AA, E), (0x23A8, F), (0x23AA, E), (0x23A7, F)],
    ),
    Construction::parts(0x007C, V, &[(0x007C, F), (0x007C, E)]),
    Construction::parts(
        0x007D,
        V,
        &[(0x23AD, F), (0x23AA, E), (0x23AC, F), (0x23AA, E), (0x23AB, F)],
    ),
    // Bars
    Construction::parts(0x00AF, H, &[(0x00AF, F), (0x00AF, E)]),
    Construction::parts(0x203E, H, &[(0x00AF, F), (0x00AF, E)]),
    Construction::parts(0x005F, H, &[(0x005F, F), (0x005F, E)]),
    Construction::parts(0x003D, H, &[(0x003D, F), (0x003D, E)]),
    Construction::parts(0x2016, V, &[(0x2016, F), (0x2016, E)]),
    // Arrows
    Construction::both(0x2190, H, &[0x27F5], &[(0x2190, F), (0x23AF, E)]),
    Construction::parts(0x2191, V, &[(0x23D0, E), (0x2191, F)]),
    Construction::both(0x2192, H, &[0x27F6], &[(0x23AF, E), (0x2192, F)]),
    Construction::parts(0x2193, V, &[(0x2193, F), (0x23D0, E)]),
    Construction::both(0x2194, H, &[0x27F7], &[(0x2190, F), (0x23AF, E), (0x2192, F)]),
    Construction::parts(0x2195, V, &[(0x2193, F), (0x23D0, E), (0x2191, F)]),
    Construction::both(0x21A4, H, &[0x27FB], &[(0x2190, F), (0x23AF, E), (0x22A3, F)]),
    Construction::both(0x21A6, H, &[0x27FC], &[(0x22A2, F), (0x23AF, E), (0x2192, F)]),
    // Harpoons
    Construction::parts(0x295A, H, &[(0x21BC, F), (0x23AF, E), (0x22A3, F)]),
    Construction::parts(0x295B, H, &[(0x22A2, F), (0x23AF, E), (0x21C0, F)]),
    Construction::parts(0x295E, H, &[(0x21BD, F), (0x23AF, E), (0x22A3, F)]),
    Construction::parts(0x295F, H, &[(0x22A2, F), (0x23AF, E), (0x21C1, F)]),
    Construction::parts(0x21C0, H, &[(0x23AF, E), (0x21C0, F)]),
    Construction::parts(0x21C1, H, &[(0x23AF, E), (0x21C1, F)]),
    Construction::parts(0x21BC, H, &[(0x21BC, F), (0x23AF, E)]),
    Construction::parts(0x21BD, H, &[(0x21BD, F), (0x23AF, E)]),
    // Double arrows
    Construction::variants(0x21D0, H, &[0x27F8]),
    Construction::variants(0x21D2, H, &[0x27F9]),
    Construction::variants(0x21D4, H, &[0x27FA]),
    // Integral
    Construction::parts(0x222B, V, &[(0x2321, F), (0x23AE, F), (0x2320, F)]),
    // Ceilings and floors
    Construction::parts(0x2308, V, &[(0x23A2, E), (0x23A1, F)]),
    Construction::parts(0x2309, V, &[(0x23A5, E), (0x23A4, F)]),
    Construction::parts(0x230A, V, &[(0x23A3, F), (0x23A2, E)]),
    Construction::parts(0x230B, V, &[(0x23A6, F), (0x23A5, E)]),
    // Moustaches
    Construction::parts(0x23B0, V, &[(0x23AD, F), (0x23AA, E), (0x23A7, F)]),
    Construction::parts(0x23B1, V, &[(0x23A9, F), (0x23AA, E), (0x23AB, F)]),
    // Long arrows
    Construction::parts(0x27F5, H, &[(0x27F5, F), (0x23AF, E)]),
    Construction::parts(0x27F6, H, &[(0x23AF, E), (0x27F6, F)]),
    Construction::parts(0x27F7, H, &[(0x2190, F), (0x23AF, E), (0x2192, F)]),
    Construction::parts(0x294E, H, &[(0x21BC, F), (0x23AF, E), (0x21C0, F)]),
    Construction::parts(0x2950, H, &[(0x21BD, F), (0x23AF, E), (0x21C1, F)]),
];

//! Mathematical alphanumeric styles and their fallback to plain letters.
//!
//! Covers the Mathematical Alphanumeric Symbols block (U+1D400..U+1D7FF),
//! the Letterlike Symbols that fill its reserved holes, and the Arabic
//! Mathematical Alphabetic Symbols block (U+1EE00..U+1EEFF).

use std::{fmt, ops::RangeInclusive, sync::LazyLock};

/// A mathematical alphanumeric style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MathStyle {
    Bold,
    Italic,
    BoldItalic,
    Script,
    BoldScript,
    Fraktur,
    BoldFraktur,
    SansSerif,
    SansSerifBold,
    SansSerifItalic,
    SansSerifBoldItalic,
    Monospace,
    DoubleStruck,
    Initial,
    Tailed,
    Looped,
    Stretched,
}

/// Reserved code points of U+1D400..U+1D7FF and the Letterlike Symbols
/// encoding the same character.
const HOLES: &[(u32, u32)] = &[
    (0x1D455, 0x210E), // italic h
    (0x1D49D, 0x212C), // script B
    (0x1D4A0, 0x2130), // script E
    (0x1D4A1, 0x2131), // script F
    (0x1D4A3, 0x210B), // script H
    (0x1D4A4, 0x2110), // script I
    (0x1D4A7, 0x2112), // script L
    (0x1D4A8, 0x2133), // script M
    (0x1D4AD, 0x211B), // script R
    (0x1D4BA, 0x212F), // script e
    (0x1D4BC, 0x210A), // script g
    (0x1D4C4, 0x2134), // script o
    (0x1D506, 0x212D), // fraktur C
    (0x1D50B, 0x210C), // fraktur H
    (0x1D50C, 0x2111), // fraktur I
    (0x1D515, 0x211C), // fraktur R
    (0x1D51D, 0x2128), // fraktur Z
    (0x1D53A, 0x2102), // double-struck C
    (0x1D53F, 0x210D), // double-struck H
    (0x1D545, 0x2115), // double-struck N
    (0x1D547, 0x2119), // double-struck P
    (0x1D548, 0x211A), // double-struck Q
    (0x1D549, 0x211D), // double-struck R
    (0x1D551, 0x2124), // double-struck Z
];

/// Base characters of a 58-entry Greek block, in block order.
const GREEK: [u32; 58] = {
    let mut table = [0u32; 58];
    let mut i = 0;
    while i < 25 {
        table[i] = 0x0391 + i as u32;
        table[26 + i] = 0x03B1 + i as u32;
        i += 1;
    }
    // The reserved capital slot holds the theta symbol.
    table[17] = 0x03F4;
    table[25] = 0x2207;
    table[51] = 0x2202;
    table[52] = 0x03F5;
    table[53] = 0x03D1;
    table[54] = 0x03F0;
    table[55] = 0x03D5;
    table[56] = 0x03F1;
    table[57] = 0x03D6;
    table
};

impl MathStyle {
    pub const ALL: &[MathStyle] = &[
        MathStyle::Bold,
        MathStyle::Italic,
        MathStyle::BoldItalic,
        MathStyle::Script,
        MathStyle::BoldScript,
        MathStyle::Fraktur,
        MathStyle::BoldFraktur,
        MathStyle::SansSerif,
        MathStyle::SansSerifBold,
        MathStyle::SansSerifItalic,
        MathStyle::SansSerifBoldItalic,
        MathStyle::Monospace,
        MathStyle::DoubleStruck,
        MathStyle::Initial,
        MathStyle::Tailed,
        MathStyle::Looped,
        MathStyle::Stretched,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            MathStyle::Bold => "bold",
            MathStyle::Italic => "italic",
            MathStyle::BoldItalic => "bold-italic",
            MathStyle::Script => "script",
            MathStyle::BoldScript => "bold-script",
            MathStyle::Fraktur => "fraktur",
            MathStyle::BoldFraktur => "bold-fraktur",
            MathStyle::SansSerif => "sans-serif",
            MathStyle::SansSerifBold => "sans-serif-bold",
            MathStyle::SansSerifItalic => "sans-serif-italic",
            MathStyle::SansSerifBoldItalic => "sans-serif-bold-italic",
            MathStyle::Monospace => "monospace",
            MathStyle::DoubleStruck => "double-struck",
            MathStyle::Initial => "initial",
            MathStyle::Tailed => "tailed",
            MathStyle::Looped => "looped",
            MathStyle::Stretched => "stretched",
        }
    }

    /// First code point of the A..Z a..z run.
    const fn latin_start(self) -> Option<u32> {
        match self {
            MathStyle::Bold => Some(0x1D400),
            MathStyle::Italic => Some(0x1D434),
            MathStyle::BoldItalic => Some(0x1D468),
            MathStyle::Script => Some(0x1D49C),
            MathStyle::BoldScript => Some(0x1D4D0),
            MathStyle::Fraktur => Some(0x1D504),
            MathStyle::DoubleStruck => Some(0x1D538),
            MathStyle::BoldFraktur => Some(0x1D56C),
            MathStyle::SansSerif => Some(0x1D5A0),
            MathStyle::SansSerifBold => Some(0x1D5D4),
            MathStyle::SansSerifItalic => Some(0x1D608),
            MathStyle::SansSerifBoldItalic => Some(0x1D63C),
            MathStyle::Monospace => Some(0x1D670),
            _ => None,
        }
    }

    const fn greek_start(self) -> Option<u32> {
        match self {
            MathStyle::Bold => Some(0x1D6A8),
            MathStyle::Italic => Some(0x1D6E2),
            MathStyle::BoldItalic => Some(0x1D71C),
            MathStyle::SansSerifBold => Some(0x1D756),
            MathStyle::SansSerifBoldItalic => Some(0x1D790),
            _ => None,
        }
    }

    const fn digit_start(self) -> Option<u32> {
        match self {
            MathStyle::Bold => Some(0x1D7CE),
            MathStyle::DoubleStruck => Some(0x1D7D8),
            MathStyle::SansSerif => Some(0x1D7E2),
            MathStyle::SansSerifBold => Some(0x1D7EC),
            MathStyle::Monospace => Some(0x1D7F6),
            _ => None,
        }
    }

    /// Single characters outside the regular runs, with their base.
    const fn extras(self) -> &'static [(u32, u32)] {
        match self {
            MathStyle::Bold => &[(0x1D7CA, 0x03DC), (0x1D7CB, 0x03DD)],
            MathStyle::Italic => &[(0x1D6A4, 0x0131), (0x1D6A5, 0x0237)],
            _ => &[],
        }
    }

    /// Arabic mathematical letters; these have no fallback.
    const fn arabic(self) -> &'static [RangeInclusive<u32>] {
        match self {
            MathStyle::DoubleStruck => &[0x1EEA1..=0x1EEA3, 0x1EEA5..=0x1EEA9, 0x1EEAB..=0x1EEBB],
            MathStyle::Initial => &[
                0x1EE21..=0x1EE22,
                0x1EE24..=0x1EE24,
                0x1EE27..=0x1EE27,
                0x1EE29..=0x1EE32,
                0x1EE34..=0x1EE37,
                0x1EE39..=0x1EE39,
                0x1EE3B..=0x1EE3B,
            ],
            MathStyle::Tailed => &[
                0x1EE42..=0x1EE42,
                0x1EE47..=0x1EE47,
                0x1EE49..=0x1EE49,
                0x1EE4B..=0x1EE4B,
                0x1EE4D..=0x1EE4F,
                0x1EE51..=0x1EE52,
                0x1EE54..=0x1EE54,
                0x1EE57..=0x1EE57,
                0x1EE59..=0x1EE59,
                0x1EE5B..=0x1EE5B,
                0x1EE5D..=0x1EE5D,
                0x1EE5F..=0x1EE5F,
            ],
            MathStyle::Looped => &[0x1EE80..=0x1EE89, 0x1EE8B..=0x1EE9B],
            MathStyle::Stretched => &[
                0x1EE61..=0x1EE62,
                0x1EE64..=0x1EE64,
                0x1EE67..=0x1EE6A,
                0x1EE6C..=0x1EE72,
                0x1EE74..=0x1EE77,
                0x1EE79..=0x1EE7C,
                0x1EE7E..=0x1EE7E,
            ],
            _ => &[],
        }
    }

    /// Styled characters paired with their plain base character.
    fn pairs(self) -> Vec<(u32, u32)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.latin_start() {
            let letters = (u32::from('A')..=u32::from('Z')).chain(u32::from('a')..=u32::from('z'));
            pairs.extend(letters.enumerate().map(|(i, base)| (resolve_hole(start + i as u32), base)));
        }
        if let Some(start) = self.greek_start() {
            pairs.extend(GREEK.iter().enumerate().map(|(i, base)| (start + i as u32, *base)));
        }
        if let Some(start) = self.digit_start() {
            pairs.extend((0..10).map(|i| (start + i, u32::from('0') + i)));
        }
        pairs.extend_from_slice(self.extras());
        pairs
    }

    /// Every code point of this style, with reserved holes replaced by
    /// their Letterlike Symbols equivalent.
    pub fn codepoints(self) -> Vec<u32> {
        let mut codepoints: Vec<u32> = self.pairs().into_iter().map(|(styled, _)| styled).collect();
        codepoints.extend(self.arabic().iter().flat_map(|r| r.clone()));
        codepoints
    }
}

impl fmt::Display for MathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn resolve_hole(codepoint: u32) -> u32 {
    HOLES
        .binary_search_by_key(&codepoint, |(hole, _)| *hole)
        .map(|i| HOLES[i].1)
        .unwrap_or(codepoint)
}

/// Styled character to base character, sorted by styled code point.
static FALLBACK: LazyLock<Vec<(u32, u32)>> = LazyLock::new(|| {
    let mut map: Vec<_> = MathStyle::ALL.iter().flat_map(|style| style.pairs()).collect();
    map.sort_unstable();
    map.dedup_by_key(|(styled, _)| *styled);
    map
});

/// The plain character a styled character falls back to, if any.
pub fn fallback_base(codepoint: u32) -> Option<u32> {
    FALLBACK.binary_search_by_key(&codepoint, |(styled, _)| *styled).ok().map(|i| FALLBACK[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_map_is_sorted_and_unique() {
        assert!(FALLBACK.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(HOLES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_style_sizes() {
        assert_eq!(MathStyle::Bold.codepoints().len(), 52 + 58 + 10 + 2);
        assert_eq!(MathStyle::Italic.codepoints().len(), 52 + 58 + 2);
        assert_eq!(MathStyle::Script.codepoints().len(), 52);
        assert_eq!(MathStyle::Monospace.codepoints().len(), 62);
        assert_eq!(MathStyle::Looped.codepoints().len(), 27);
    }

    #[test]
    fn test_holes_are_replaced() {
        let italic = MathStyle::Italic.codepoints();
        assert!(italic.contains(&0x210E));
        assert!(!italic.contains(&0x1D455));

        let double_struck = MathStyle::DoubleStruck.codepoints();
        assert!(double_struck.contains(&0x211D));
        assert!(double_struck.contains(&0x1D7D8));
        assert!(double_struck.contains(&0x1EEA1));
    }

    #[test]
    fn test_fallback_lookup() {
        assert_eq!(fallback_base(0x1D400), Some(u32::from('A')));
        assert_eq!(fallback_base(0x1D41A), Some(u32::from('a')));
        assert_eq!(fallback_base(0x210E), Some(u32::from('h')));
        assert_eq!(fallback_base(0x1D6E2), Some(0x0391));
        assert_eq!(fallback_base(0x1D6B9), Some(0x03F4));
        assert_eq!(fallback_base(0x1D6C1), Some(0x2207));
        assert_eq!(fallback_base(0x1D7C9), Some(0x03D6));
        assert_eq!(fallback_base(0x1D7FF), Some(u32::from('9')));
        assert_eq!(fallback_base(0x1D6A5), Some(0x0237));
    }

    #[test]
    fn test_unmapped_codepoints() {
        assert_eq!(fallback_base(0x1D455), None);
        assert_eq!(fallback_base(0x1EE21), None);
        assert_eq!(fallback_base(u32::from('A')), None);
    }
}

//! Configuration constants for math table checks.

use std::ops::RangeInclusive;

/// Minimum ratio of `DisplayOperatorMinHeight` to a large operator's base height.
pub const MIN_DISPLAY_OPERATOR_FACTOR: f64 = 1.3;

/// Scale applied to a base glyph to synthesize its display-style variant.
pub const DISPLAY_OPERATOR_SCALE: f64 = std::f64::consts::SQRT_2;

/// Suggested and stored constants may differ by `units_per_em / TOLERANCE_DIVISOR`.
pub const TOLERANCE_DIVISOR: f64 = 50.0;

/// Substring identifying script-style substitution subtables.
pub const SSTY_MARKER: &str = "ssty";

/// Glyph name suffix of synthesized display-style variants.
pub const DISPLAY_SUFFIX: &str = ".display";

/// Code points every checked font must map.
pub const BASIC_LATIN: RangeInclusive<u32> = 0x20..=0x7E;

/// Glyph whose height sizes display operators.
pub const DISPLAY_REFERENCE: char = 'O';

/// Glyph whose vertical center gives the math axis.
pub const AXIS_REFERENCE: char = '+';

/// Allowed divergence between a stored constant and its suggestion.
pub fn tolerance(units_per_em: u16) -> f64 {
    f64::from(units_per_em) / TOLERANCE_DIVISOR
}

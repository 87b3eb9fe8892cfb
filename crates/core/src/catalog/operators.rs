//! Operator code point tables.

use std::ops::RangeInclusive;

/// Operators that grow in display style (MathML operator dictionary `largeop`).
pub const LARGE_OPERATORS: &[u32] = &[
    0x220F, 0x2210, 0x2211, // products, coproduct, summation
    0x222B, 0x222C, 0x222D, 0x222E, 0x222F, 0x2230, 0x2231, 0x2232, 0x2233, // integrals
    0x22C0, 0x22C1, 0x22C2, 0x22C3, // n-ary logical and set operators
    0x2A00, 0x2A01, 0x2A02, 0x2A03, 0x2A04, 0x2A05, 0x2A06, 0x2A07, 0x2A08, 0x2A09, 0x2A0A,
    0x2A0B, 0x2A0C, 0x2A0D, 0x2A0E, 0x2A0F, 0x2A10, 0x2A11, 0x2A12, 0x2A13, 0x2A14, 0x2A15,
    0x2A16, 0x2A17, 0x2A18, 0x2A19, 0x2A1A, 0x2A1B, 0x2A1C, // supplemental n-ary operators
    0x2AFC, 0x2AFF,
];

/// Integral-like operators, which need a positive italic correction.
pub const INTEGRALS: &[RangeInclusive<u32>] = &[0x222B..=0x2233, 0x2A0B..=0x2A1C];

/// Operators commonly used as prescripts (primes), which want `ssty` forms.
pub const PRESCRIPTED_OPERATORS: &[RangeInclusive<u32>] = &[0x2032..=0x2037, 0x2057..=0x2057];

/// Every code point of a range table, in order.
pub fn expand(ranges: &[RangeInclusive<u32>]) -> impl Iterator<Item = u32> + '_ {
    ranges.iter().flat_map(|r| r.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_operators_sorted_and_unique() {
        assert!(LARGE_OPERATORS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(LARGE_OPERATORS.len(), 47);
    }

    #[test]
    fn test_integrals_are_large_operators() {
        for cp in expand(INTEGRALS) {
            assert!(LARGE_OPERATORS.contains(&cp), "U+{cp:04X}");
        }
    }

    #[test]
    fn test_prescripted_operators() {
        let all: Vec<_> = expand(PRESCRIPTED_OPERATORS).collect();
        assert_eq!(all, [0x2032, 0x2033, 0x2034, 0x2035, 0x2036, 0x2037, 0x2057]);
    }
}

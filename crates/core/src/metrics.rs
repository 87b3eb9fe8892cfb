//! Checks of the scalar math constants against glyph geometry.

use log::debug;
use math_font_store::{FontStore, MathConstant, ZeroPolicy};

use crate::{
    catalog::LARGE_OPERATORS,
    config::{self, AXIS_REFERENCE, DISPLAY_REFERENCE, MIN_DISPLAY_OPERATOR_FACTOR},
    finding::{Findings, codepoint_field},
};

/// Derives missing math constants and compares set ones with suggestions.
///
/// Only unset constants are written; a stored value is never overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsValidator {
    zero_policy: ZeroPolicy,
}

impl MetricsValidator {
    pub fn new(zero_policy: ZeroPolicy) -> Self {
        Self { zero_policy }
    }

    pub fn validate<S: FontStore + ?Sized>(&self, font: &mut S) -> Findings {
        let mut findings = Findings::new();

        if font.create_math_table() {
            findings.warning("MATH", "math table not found; created an empty one");
        } else {
            findings.info("MATH", "math table present");
        }

        let tolerance = config::tolerance(font.units_per_em());
        let stroke = f64::from(font.default_stroke_width());

        let display_min = font
            .glyph(u32::from(DISPLAY_REFERENCE))
            .map(|o| f64::from(o.bbox().height()) * MIN_DISPLAY_OPERATOR_FACTOR);
        self.check(font, MathConstant::DisplayOperatorMinHeight, display_min, tolerance, &mut findings);
        self.check_large_operators(font, &mut findings);

        let axis = font.glyph(u32::from(AXIS_REFERENCE)).map(|plus| plus.bbox().vertical_center());
        self.check(font, MathConstant::AxisHeight, axis, tolerance, &mut findings);

        for constant in [
            MathConstant::FractionRuleThickness,
            MathConstant::OverbarRuleThickness,
            MathConstant::UnderbarRuleThickness,
        ] {
            self.check(font, constant, Some(stroke), tolerance, &mut findings);
        }

        let radical_gap = stroke + f64::from(font.x_height()) / 4.0;
        self.check(
            font,
            MathConstant::RadicalDisplayStyleVerticalGap,
            Some(radical_gap),
            tolerance,
            &mut findings,
        );
        self.check(font, MathConstant::RadicalRuleThickness, Some(stroke), tolerance, &mut findings);

        findings
    }

    /// Fill an unset constant with `suggested`, or compare a set one with it.
    fn check<S: FontStore + ?Sized>(
        &self,
        font: &mut S,
        constant: MathConstant,
        suggested: Option<f64>,
        tolerance: f64,
        findings: &mut Findings,
    ) {
        let Some(suggested) = suggested else {
            debug!("No reference glyph for {constant}, skipping");
            return;
        };
        let field = constant.name();
        let current = font.math_constants().and_then(|m| m.get(constant, self.zero_policy));

        match current {
            None => {
                let value = suggested.round() as i32;
                if value == 0 && self.zero_policy == ZeroPolicy::ZeroMeansUnset {
                    // Writing 0 would still read as unset.
                    findings.warning(field, "unset, and the suggested value rounds to 0");
                    return;
                }
                font.math_constants_mut().set(constant, value);
                findings.warning(field, format!("unset; set to {value}"));
            }
            Some(value) if (f64::from(value) - suggested).abs() > tolerance => {
                findings.warning(
                    field,
                    format!(
                        "set to {value} while {suggested:.0} is suggested (tolerance {tolerance})"
                    ),
                );
            }
            Some(value) => {
                findings.info(field, format!("{value} is within {tolerance} of {suggested:.0}"));
            }
        }
    }

    /// Display style must actually enlarge every large operator.
    fn check_large_operators<S: FontStore + ?Sized>(&self, font: &S, findings: &mut Findings) {
        let min_height = font
            .math_constants()
            .and_then(|m| m.get(MathConstant::DisplayOperatorMinHeight, self.zero_policy));
        let Some(min_height) = min_height else {
            debug!("DisplayOperatorMinHeight unset, skipping large operator heights");
            return;
        };

        for &codepoint in LARGE_OPERATORS {
            let Some(glyph) = font.glyph(codepoint) else {
                continue;
            };
            let base_height = glyph.bbox().height();
            if f64::from(min_height) < MIN_DISPLAY_OPERATOR_FACTOR * f64::from(base_height) {
                findings.warning(
                    codepoint_field(codepoint),
                    format!(
                        "DisplayOperatorMinHeight ({min_height}) is less than \
                         {MIN_DISPLAY_OPERATOR_FACTOR} times the base height ({base_height})"
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use math_font_store::{BoundingBox, Glyph, MathConstants, MathFont};

    use super::*;
    use crate::{finding::Severity, test_fonts::basic_latin_font};

    fn axis_height_after(preset: i32, policy: ZeroPolicy) -> (Option<i32>, Severity) {
        let mut constants = MathConstants::new();
        constants.set(MathConstant::AxisHeight, preset);
        let mut font = basic_latin_font(1000).with_math_constants(constants);

        let findings = MetricsValidator::new(policy).validate(&mut font);
        let severity = findings.for_field("AxisHeight").map(|f| f.severity).next().unwrap();
        let value = font.math_constants().unwrap().raw(MathConstant::AxisHeight);
        (value, severity)
    }

    #[test]
    fn test_derives_unset_constants() {
        let mut font = basic_latin_font(1000);
        let findings = MetricsValidator::default().validate(&mut font);

        let math = font.math_constants().unwrap();
        assert_eq!(math.raw(MathConstant::AxisHeight), Some(250));
        // 'O' is 720 units tall.
        assert_eq!(math.raw(MathConstant::DisplayOperatorMinHeight), Some(936));
        assert_eq!(math.raw(MathConstant::FractionRuleThickness), Some(50));
        assert_eq!(math.raw(MathConstant::OverbarRuleThickness), Some(50));
        assert_eq!(math.raw(MathConstant::UnderbarRuleThickness), Some(50));
        assert_eq!(math.raw(MathConstant::RadicalRuleThickness), Some(50));
        // 50 + 450 / 4
        assert_eq!(math.raw(MathConstant::RadicalDisplayStyleVerticalGap), Some(163));

        assert_eq!(findings.for_field("MATH").next().map(|f| f.severity), Some(Severity::Warning));
        assert_eq!(findings.count(Severity::Warning), 8);
    }

    #[test]
    fn test_axis_height_tolerance() {
        // em 1000 gives a tolerance of 20 around 250.
        assert_eq!(axis_height_after(269, ZeroPolicy::default()), (Some(269), Severity::Info));
        assert_eq!(axis_height_after(231, ZeroPolicy::default()), (Some(231), Severity::Info));
        assert_eq!(axis_height_after(271, ZeroPolicy::default()), (Some(271), Severity::Warning));
        assert_eq!(axis_height_after(229, ZeroPolicy::default()), (Some(229), Severity::Warning));
    }

    #[test]
    fn test_zero_policy() {
        assert_eq!(axis_height_after(0, ZeroPolicy::ZeroMeansUnset), (Some(250), Severity::Warning));
        // An explicit zero is kept and reported as diverging.
        assert_eq!(axis_height_after(0, ZeroPolicy::Explicit), (Some(0), Severity::Warning));
    }

    #[test]
    fn test_zero_suggestion_is_not_written() {
        let mut font = MathFont::new(1000, 0);
        font.insert_glyph(Glyph::new("O", Some(0x4F), BoundingBox::new(0, 0, 600, 700))).unwrap();

        let findings = MetricsValidator::default().validate(&mut font);
        let math = font.math_constants().unwrap();
        assert_eq!(math.raw(MathConstant::FractionRuleThickness), None);
        assert_eq!(math.raw(MathConstant::DisplayOperatorMinHeight), Some(910));
        assert_eq!(findings.count(Severity::Warning), findings.len());
    }

    #[test]
    fn test_missing_reference_glyph_is_skipped() {
        let mut font = MathFont::new(1000, 40);
        let findings = MetricsValidator::default().validate(&mut font);

        assert!(findings.for_field("AxisHeight").next().is_none());
        assert!(findings.for_field("DisplayOperatorMinHeight").next().is_none());
        assert_eq!(font.math_constants().unwrap().raw(MathConstant::AxisHeight), None);
    }

    #[test]
    fn test_large_operator_height() {
        let mut font = basic_latin_font(1000);
        font.insert_glyph(Glyph::new("summation", Some(0x2211), BoundingBox::new(0, -300, 900, 900)))
            .unwrap();
        font.insert_glyph(Glyph::new("product", Some(0x220F), BoundingBox::new(0, 0, 700, 700)))
            .unwrap();

        let findings = MetricsValidator::default().validate(&mut font);
        // 936 < 1.3 * 1200, but not < 1.3 * 700
        assert_eq!(findings.for_field("U+2211").count(), 1);
        assert_eq!(findings.for_field("U+220F").count(), 0);
    }
}

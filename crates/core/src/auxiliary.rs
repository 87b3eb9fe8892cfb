//! Italic corrections, script-style substitutions and styled alphanumerics.

use kurbo::Affine;
use log::{debug, info};
use math_font_store::{Axis, FontStore, Glyph};

use crate::{
    catalog::{INTEGRALS, MathStyle, PRESCRIPTED_OPERATORS, expand, fallback_base},
    config::SSTY_MARKER,
    finding::{Findings, codepoint_field},
    options::CheckOptions,
};

/// Run the italic correction, `ssty` and alphanumeric coverage checks.
pub fn validate_auxiliary<S: FontStore + ?Sized>(font: &mut S, options: &CheckOptions) -> Findings {
    let mut findings = check_italic_corrections(font);
    findings.extend(check_prescripts(font));
    findings.extend(check_alphanumerics(font, options));
    findings
}

/// Integrals and their vertical variants need a positive italic correction
/// to place limits. These are never repaired.
pub fn check_italic_corrections<S: FontStore + ?Sized>(font: &S) -> Findings {
    let mut findings = Findings::new();
    for codepoint in expand(INTEGRALS) {
        let Some(base) = font.glyph(codepoint) else {
            continue;
        };
        let field = codepoint_field(codepoint);

        let mut names = vec![base.name.as_str()];
        for name in base.variant_list(Axis::Vertical).unwrap_or_default() {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }

        let mut failed = false;
        for glyph in names.into_iter().filter_map(|name| font.glyph_by_name(name)) {
            match glyph.italic_correction {
                None => {
                    findings.warning(&field, format!("'{}' has no italic correction", glyph.name));
                    failed = true;
                }
                Some(value) if value <= 0 => {
                    findings.warning(
                        &field,
                        format!("'{}' has a non-positive italic correction ({value})", glyph.name),
                    );
                    failed = true;
                }
                Some(_) => {}
            }
        }
        if !failed {
            findings.info(&field, "italic corrections are positive");
        }
    }
    findings
}

/// Prescripted operators should have script-style (`ssty`) forms.
pub fn check_prescripts<S: FontStore + ?Sized>(font: &S) -> Findings {
    let mut findings = Findings::new();
    for codepoint in expand(PRESCRIPTED_OPERATORS) {
        let Some(glyph) = font.glyph(codepoint) else {
            continue;
        };
        let field = codepoint_field(codepoint);
        if glyph.substitution_subtables().any(|id| id.contains(SSTY_MARKER)) {
            findings.info(field, "has an ssty substitution");
        } else {
            findings.warning(field, "no ssty substitution");
        }
    }
    findings
}

/// Report styled alphanumerics and copy missing ones from donor fonts.
pub fn check_alphanumerics<S: FontStore + ?Sized>(font: &mut S, options: &CheckOptions) -> Findings {
    let mut findings = Findings::new();
    for &style in MathStyle::ALL {
        let donor = options.donor_for(style);
        let mut copied = 0usize;

        for codepoint in style.codepoints() {
            let field = codepoint_field(codepoint);
            if font.contains(codepoint) {
                findings.info(field, format!("{style} glyph present"));
                continue;
            }
            findings.warning(&field, format!("missing {style} glyph"));

            let Some(donor) = donor else {
                continue;
            };
            let Some(base) = fallback_base(codepoint) else {
                debug!("No fallback for {field}");
                continue;
            };
            let Some(source) = donor.glyph(base) else {
                findings.warning(
                    &field,
                    format!("{style} donor has no glyph for {}", codepoint_field(base)),
                );
                continue;
            };

            let copy = donor_copy(source, codepoint, font.units_per_em(), donor.units_per_em());
            let name = copy.name.clone();
            match font.insert_glyph(copy) {
                Ok(()) => {
                    copied += 1;
                    findings.synthesized(
                        &field,
                        format!(
                            "copied '{}' ({}) from the {style} donor as '{name}'",
                            source.name,
                            codepoint_field(base)
                        ),
                    );
                }
                Err(e) => findings.warning(&field, format!("cannot copy donor glyph: {e}")),
            }
        }

        if copied > 0 {
            info!("Copied {copied} {style} glyphs from donor");
        }
    }
    findings
}

/// The donor glyph re-encoded at `codepoint`, scaled to the target em.
fn donor_copy(source: &Glyph, codepoint: u32, target_upem: u16, donor_upem: u16) -> Glyph {
    let mut copy = Glyph::new(format!("u{codepoint:05X}"), Some(codepoint), source.bbox())
        .with_advance_width(source.advance_width)
        .with_contours(source.contours.clone());
    if target_upem != donor_upem && donor_upem != 0 {
        copy.transform(Affine::scale(f64::from(target_upem) / f64::from(donor_upem)));
    }
    copy
}

#[cfg(test)]
mod tests {
    use math_font_store::{BoundingBox, MathFont};

    use super::*;
    use crate::finding::Severity;

    fn glyph(name: &str, codepoint: u32) -> Glyph {
        Glyph::new(name, Some(codepoint), BoundingBox::new(0, -200, 400, 900))
    }

    #[test]
    fn test_italic_correction_signs() {
        let mut font = MathFont::new(1000, 50);
        let mut integral = glyph("integral", 0x222B).with_italic_correction(120);
        integral.set_variant_list(
            Axis::Vertical,
            vec!["integral".into(), "integral.v1".into(), "integral.v2".into()],
        );
        font.insert_glyph(integral).unwrap();
        font.insert_glyph(Glyph::new("integral.v1", None, BoundingBox::default())).unwrap();
        font.insert_glyph(
            Glyph::new("integral.v2", None, BoundingBox::default()).with_italic_correction(-5),
        )
        .unwrap();
        font.insert_glyph(glyph("dblintegral", 0x222C).with_italic_correction(80)).unwrap();

        let findings = check_italic_corrections(&font);
        let integral: Vec<_> = findings.for_field("U+222B").collect();
        assert_eq!(integral.len(), 2);
        assert!(integral.iter().all(|f| f.severity == Severity::Warning));
        assert!(integral[0].message.contains("integral.v1"));
        assert!(integral[1].message.contains("-5"));

        assert_eq!(findings.for_field("U+222C").next().map(|f| f.severity), Some(Severity::Info));
        assert_eq!(findings.len(), 3);
    }

    #[test]
    fn test_prescript_ssty() {
        let mut font = MathFont::new(1000, 50);
        font.insert_glyph(glyph("prime", 0x2032).with_substitution("'ssty' lookup 3 subtable 0"))
            .unwrap();
        font.insert_glyph(glyph("second", 0x2033).with_substitution("'salt' lookup 1 subtable 0"))
            .unwrap();

        let findings = check_prescripts(&font);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings.for_field("U+2032").next().map(|f| f.severity), Some(Severity::Info));
        assert_eq!(findings.for_field("U+2033").next().map(|f| f.severity), Some(Severity::Warning));
    }

    #[test]
    fn test_donor_copy_scales_to_target_em() {
        let source = glyph("A", 0x41).with_advance_width(600);
        let copy = donor_copy(&source, 0x1D434, 1000, 2000);
        assert_eq!(copy.name, "u1D434");
        assert_eq!(copy.codepoint, Some(0x1D434));
        assert_eq!(copy.bbox(), BoundingBox::new(0, -100, 200, 450));
        assert_eq!(copy.advance_width, 300);
    }

    #[test]
    fn test_alphanumerics_without_donor() {
        let mut font = MathFont::new(1000, 50);
        font.insert_glyph(glyph("A.bold", 0x1D400)).unwrap();

        let findings = check_alphanumerics(&mut font, &CheckOptions::new());
        assert_eq!(findings.for_field("U+1D400").next().map(|f| f.severity), Some(Severity::Info));
        assert_eq!(findings.count(Severity::Synthesized), 0);
        assert_eq!(font.glyph_count(), 1);
    }
}

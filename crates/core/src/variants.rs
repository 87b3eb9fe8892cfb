//! Size variants and glyph assemblies for stretchy constructions.

use log::debug;
use math_font_store::{Axis, FontStore, MathConstant, Part, ZeroPolicy};

use crate::{
    catalog::{Construction, PartSpec},
    finding::{Findings, codepoint_field},
};

/// Fills in missing variant lists and assemblies from the construction catalog.
///
/// Each variant list and each assembly is written whole or not at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantAssemblyBuilder {
    zero_policy: ZeroPolicy,
}

impl VariantAssemblyBuilder {
    pub fn new(zero_policy: ZeroPolicy) -> Self {
        Self { zero_policy }
    }

    pub fn build_constructions<S: FontStore + ?Sized>(
        &self,
        font: &mut S,
        catalog: &[Construction],
    ) -> Findings {
        let mut findings = Findings::new();
        for entry in catalog {
            if !font.contains(entry.codepoint) {
                findings.missing_glyph(entry.codepoint);
                continue;
            }
            if let Some(variants) = entry.variants {
                self.build_variants(font, entry, variants, &mut findings);
            }
            if let Some(parts) = entry.parts {
                self.build_assembly(font, entry, parts, &mut findings);
            }
        }
        findings
    }

    fn build_variants<S: FontStore + ?Sized>(
        &self,
        font: &mut S,
        entry: &Construction,
        variants: &[u32],
        findings: &mut Findings,
    ) {
        let field = codepoint_field(entry.codepoint);
        let Some(base) = font.glyph(entry.codepoint) else {
            return;
        };
        // An empty list counts as no list.
        match base.variants().filter(|list| !list.glyphs.is_empty()) {
            Some(list) if list.axis == entry.axis => {
                findings.info(field, format!("{} variants present", entry.axis));
                return;
            }
            Some(list) => {
                findings.warning(
                    field,
                    format!("has {} variants where {} ones are expected", list.axis, entry.axis),
                );
                return;
            }
            None => {}
        }

        let mut names = vec![base.name.clone()];
        for &codepoint in variants {
            match font.glyph(codepoint) {
                Some(glyph) => names.push(glyph.name.clone()),
                None => {
                    findings.warning(
                        field,
                        format!(
                            "missing {} variants; cannot set them without {}",
                            entry.axis,
                            codepoint_field(codepoint)
                        ),
                    );
                    return;
                }
            }
        }

        let message = format!("missing {} variants; set to {}", entry.axis, names.join(" "));
        if let Some(glyph) = font.glyph_mut(entry.codepoint) {
            glyph.set_variant_list(entry.axis, names);
            findings.warning(field, message);
        }
    }

    fn build_assembly<S: FontStore + ?Sized>(
        &self,
        font: &mut S,
        entry: &Construction,
        specs: &[PartSpec],
        findings: &mut Findings,
    ) {
        let field = codepoint_field(entry.codepoint);
        let Some(base) = font.glyph(entry.codepoint) else {
            return;
        };
        if base.assembly(entry.axis).is_some_and(|parts| !parts.is_empty()) {
            findings.info(field, format!("{} components present", entry.axis));
            return;
        }
        if let Some(other) = [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .find(|axis| *axis != entry.axis && base.assembly(*axis).is_some_and(|p| !p.is_empty()))
        {
            findings.warning(
                field,
                format!("has {other} components where {} ones are expected", entry.axis),
            );
            return;
        }

        // FontForge leaves MinConnectorOverlap at 0 by default.
        let overlap = font
            .math_constants()
            .and_then(|m| m.get(MathConstant::MinConnectorOverlap, self.zero_policy))
            .unwrap_or(0);
        debug!("Building {field} assembly with connector overlap {overlap}");

        let last = specs.len().saturating_sub(1);
        let mut parts = Vec::with_capacity(specs.len());
        for (i, &(codepoint, is_extender)) in specs.iter().enumerate() {
            let Some(glyph) = font.glyph(codepoint) else {
                findings.warning(
                    field,
                    format!(
                        "missing {} components; cannot build them without {}",
                        entry.axis,
                        codepoint_field(codepoint)
                    ),
                );
                return;
            };
            parts.push(Part {
                glyph: glyph.name.clone(),
                is_extender,
                start_connector_length: if i == 0 { 0 } else { overlap },
                end_connector_length: if i == last { 0 } else { overlap },
                full_advance: glyph.bbox().extent(entry.axis),
            });
        }

        let count = parts.len();
        if let Some(glyph) = font.glyph_mut(entry.codepoint) {
            glyph.set_assembly(entry.axis, parts);
            findings.warning(field, format!("missing {} components; built {count} parts", entry.axis));
        }
    }
}

#[cfg(test)]
mod tests {
    use math_font_store::{BoundingBox, MathConstants, MathFont};

    use super::*;
    use crate::{
        catalog::CONSTRUCTIONS,
        finding::Severity,
        test_fonts::{add_glyph, basic_latin_font},
    };

    const PARENTHESIS: Construction = Construction {
        codepoint: 0x28,
        axis: Axis::Vertical,
        variants: None,
        parts: Some(&[(0x239D, false), (0x239C, true), (0x239B, false)]),
    };

    const ARROW: Construction = Construction {
        codepoint: 0x2192,
        axis: Axis::Horizontal,
        variants: Some(&[0x27F6]),
        parts: Some(&[(0x23AF, true), (0x2192, false)]),
    };

    fn font_with_overlap(overlap: i32) -> MathFont {
        let mut constants = MathConstants::new();
        constants.set(MathConstant::MinConnectorOverlap, overlap);
        let mut font = basic_latin_font(1000).with_math_constants(constants);
        add_glyph(&mut font, 0x239B, BoundingBox::new(100, 300, 500, 900));
        add_glyph(&mut font, 0x239C, BoundingBox::new(100, 0, 250, 600));
        add_glyph(&mut font, 0x239D, BoundingBox::new(100, -300, 500, 300));
        font
    }

    #[test]
    fn test_assembly_connectors() {
        let mut font = font_with_overlap(20);
        let findings = VariantAssemblyBuilder::default().build_constructions(&mut font, &[PARENTHESIS]);
        assert_eq!(findings.count(Severity::Warning), 1);

        let parts = font.glyph(0x28).unwrap().assembly(Axis::Vertical).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!((parts[0].start_connector_length, parts[0].end_connector_length), (0, 20));
        assert_eq!((parts[1].start_connector_length, parts[1].end_connector_length), (20, 20));
        assert_eq!((parts[2].start_connector_length, parts[2].end_connector_length), (20, 0));
        assert_eq!(parts.iter().map(|p| p.full_advance).collect::<Vec<_>>(), [600, 600, 600]);
        assert!(parts[1].is_extender && !parts[0].is_extender);
        assert_eq!(parts[0].glyph, "uni239D");
    }

    #[test]
    fn test_unset_overlap_reads_as_zero() {
        let mut font = font_with_overlap(0);
        VariantAssemblyBuilder::default().build_constructions(&mut font, &[PARENTHESIS]);
        let parts = font.glyph(0x28).unwrap().assembly(Axis::Vertical).unwrap();
        assert!(parts.iter().all(|p| p.start_connector_length == 0 && p.end_connector_length == 0));
    }

    #[test]
    fn test_missing_part_writes_nothing() {
        let mut font = basic_latin_font(1000);
        add_glyph(&mut font, 0x239B, BoundingBox::new(100, 300, 500, 900));
        add_glyph(&mut font, 0x239D, BoundingBox::new(100, -300, 500, 300));

        let findings = VariantAssemblyBuilder::default().build_constructions(&mut font, &[PARENTHESIS]);
        assert_eq!(findings.count(Severity::Warning), 1);
        assert!(findings.iter().next().unwrap().message.contains("U+239C"));
        assert!(font.glyph(0x28).unwrap().assembly(Axis::Vertical).is_none());
    }

    #[test]
    fn test_variants_and_assembly_are_independent() {
        let mut font = basic_latin_font(1000);
        add_glyph(&mut font, 0x2192, BoundingBox::new(0, 0, 800, 400));
        add_glyph(&mut font, 0x27F6, BoundingBox::new(0, 0, 1500, 400));

        let findings = VariantAssemblyBuilder::default().build_constructions(&mut font, &[ARROW]);
        assert_eq!(findings.count(Severity::Warning), 2);

        let arrow = font.glyph(0x2192).unwrap();
        assert_eq!(
            arrow.variant_list(Axis::Horizontal),
            Some(["uni2192".to_string(), "uni27F6".to_string()].as_slice())
        );
        // U+23AF is missing.
        assert!(arrow.assembly(Axis::Horizontal).is_none());
    }

    #[test]
    fn test_missing_variant_writes_nothing() {
        let mut font = basic_latin_font(1000);
        add_glyph(&mut font, 0x2192, BoundingBox::new(0, 0, 800, 400));
        add_glyph(&mut font, 0x23AF, BoundingBox::new(0, 180, 500, 220));

        let findings = VariantAssemblyBuilder::default().build_constructions(&mut font, &[ARROW]);
        let variants: Vec<_> =
            findings.iter().filter(|f| f.message.contains("variants")).collect();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].severity, Severity::Warning);
        assert!(variants[0].message.contains("U+27F6"));

        let arrow = font.glyph(0x2192).unwrap();
        assert!(arrow.variant_list(Axis::Horizontal).is_none());
        assert_eq!(arrow.assembly(Axis::Horizontal).map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_empty_variant_list_is_filled() {
        let mut font = basic_latin_font(1000);
        add_glyph(&mut font, 0x2192, BoundingBox::new(0, 0, 800, 400));
        add_glyph(&mut font, 0x27F6, BoundingBox::new(0, 0, 1500, 400));
        font.glyph_mut(0x2192).unwrap().set_variant_list(Axis::Horizontal, vec![]);

        let findings = VariantAssemblyBuilder::default().build_constructions(&mut font, &[ARROW]);
        assert_eq!(findings.count(Severity::Info), 0);
        assert_eq!(
            font.glyph(0x2192).unwrap().variant_list(Axis::Horizontal),
            Some(["uni2192".to_string(), "uni27F6".to_string()].as_slice())
        );
    }

    #[test]
    fn test_existing_data_is_left_alone() {
        let mut font = font_with_overlap(20);
        font.glyph_mut(0x28).unwrap().set_assembly(Axis::Vertical, vec![]);
        VariantAssemblyBuilder::default().build_constructions(&mut font, &[PARENTHESIS]);
        let before = font.clone();

        let findings = VariantAssemblyBuilder::default().build_constructions(&mut font, &[PARENTHESIS]);
        assert_eq!(font, before);
        assert_eq!(findings.count(Severity::Info), 1);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_missing_integral_is_one_warning() {
        let mut font = font_with_overlap(20);
        let findings = VariantAssemblyBuilder::default().build_constructions(&mut font, CONSTRUCTIONS);

        let integral: Vec<_> = findings.for_field("U+222B").collect();
        assert_eq!(integral.len(), 1);
        assert_eq!(integral[0].severity, Severity::Warning);

        assert!(font.glyph(0x28).unwrap().assembly(Axis::Vertical).is_some());
    }
}

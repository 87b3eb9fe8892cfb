//! Display-style sizes of large operators.

use kurbo::Affine;
use log::{debug, info};
use math_font_store::{Axis, FontStore, MathConstant, ZeroPolicy};

use crate::{
    config::{DISPLAY_OPERATOR_SCALE, DISPLAY_SUFFIX},
    finding::{Findings, codepoint_field},
};

/// Makes sure every large operator has a variant usable in display style.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargeOperatorDisplaySizer {
    zero_policy: ZeroPolicy,
}

impl LargeOperatorDisplaySizer {
    pub fn new(zero_policy: ZeroPolicy) -> Self {
        Self { zero_policy }
    }

    pub fn ensure_display_size<S: FontStore + ?Sized>(
        &self,
        font: &mut S,
        large_operators: &[u32],
    ) -> Findings {
        let mut findings = Findings::new();
        let min_height = font
            .math_constants()
            .and_then(|m| m.get(MathConstant::DisplayOperatorMinHeight, self.zero_policy));

        for &codepoint in large_operators {
            let field = codepoint_field(codepoint);
            let Some(glyph) = font.glyph(codepoint) else {
                findings.missing_glyph(codepoint);
                continue;
            };

            if let Some(variants) = glyph.variant_list(Axis::Vertical).filter(|v| !v.is_empty()) {
                let Some(min_height) = min_height else {
                    findings.warning(&field, "DisplayOperatorMinHeight is unset; variants not checked");
                    continue;
                };
                let tall_enough = variants
                    .iter()
                    .filter_map(|name| font.glyph_by_name(name))
                    .any(|v| v.bbox().height() >= min_height);
                if tall_enough {
                    findings.info(&field, "has a display size variant");
                } else {
                    findings.warning(
                        &field,
                        format!("no size variant is at least DisplayOperatorMinHeight ({min_height}) tall"),
                    );
                }
                continue;
            }

            let base = glyph.name.clone();
            let display = format!("{base}{DISPLAY_SUFFIX}");
            if font.glyph_by_name(&display).is_some() {
                findings.warning(&field, format!("no vertical variants, and '{display}' already exists"));
                continue;
            }

            let height = match font.duplicate_glyph(&base, &display) {
                Ok(copy) => {
                    copy.transform(Affine::scale(DISPLAY_OPERATOR_SCALE));
                    copy.bbox().height()
                }
                Err(e) => {
                    findings.warning(&field, format!("cannot add a display variant: {e}"));
                    continue;
                }
            };
            debug!("Scaled {base} to {display} ({height} units tall)");

            if let Some(glyph) = font.glyph_mut(codepoint) {
                glyph.set_variant_list(Axis::Vertical, vec![base, display.clone()]);
            }
            info!("Synthesized display variant {display}");
            findings.synthesized(
                &field,
                format!("no vertical variants; added '{display}' scaled by {DISPLAY_OPERATOR_SCALE:.4} ({height} units tall)"),
            );
        }
        findings
    }
}

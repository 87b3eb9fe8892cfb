//! The full check-and-repair pass over one font.

use log::info;
use math_font_store::FontStore;

use crate::{
    auxiliary::validate_auxiliary,
    catalog::{CONSTRUCTIONS, LARGE_OPERATORS},
    config::BASIC_LATIN,
    display::LargeOperatorDisplaySizer,
    finding::{Finding, Findings, Severity, codepoint_field},
    metrics::MetricsValidator,
    options::CheckOptions,
    variants::VariantAssemblyBuilder,
};

/// Outcome of a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    findings: Findings,
}

impl Report {
    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    pub fn into_findings(self) -> Findings {
        self.findings
    }

    /// Whether a structural error stopped the pass.
    pub fn is_aborted(&self) -> bool {
        self.findings.has_errors()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings.count(severity)
    }
}

/// Check and repair `font`, handing each component's findings to `emit` as
/// soon as that component finishes.
///
/// Components run in a fixed order (Basic Latin, constants, constructions,
/// display sizes, auxiliary checks) and emit their findings in the order
/// they were produced, so the stream is the same as the final report.
///
/// A missing Basic Latin glyph is an error and stops the pass before
/// anything is modified.
pub fn check_font<S, F>(font: &mut S, options: &CheckOptions, mut emit: F) -> Report
where
    S: FontStore + ?Sized,
    F: FnMut(&Finding),
{
    let mut report = Report::default();
    let mut record = |findings: Findings, report: &mut Report| {
        findings.iter().for_each(&mut emit);
        report.findings.extend(findings);
    };

    let basic_latin = check_basic_latin(font);
    let aborted = basic_latin.has_errors();
    record(basic_latin, &mut report);
    if aborted {
        return report;
    }

    info!("Checking math constants");
    record(MetricsValidator::new(options.zero_policy).validate(font), &mut report);

    info!("Checking {} stretchy constructions", CONSTRUCTIONS.len());
    let builder = VariantAssemblyBuilder::new(options.zero_policy);
    record(builder.build_constructions(font, CONSTRUCTIONS), &mut report);

    info!("Checking {} large operators", LARGE_OPERATORS.len());
    let sizer = LargeOperatorDisplaySizer::new(options.zero_policy);
    record(sizer.ensure_display_size(font, LARGE_OPERATORS), &mut report);

    info!("Checking italic corrections, prescripts and alphanumerics");
    record(validate_auxiliary(font, options), &mut report);

    report
}

/// Every Basic Latin character needs a glyph.
pub fn check_basic_latin<S: FontStore + ?Sized>(font: &S) -> Findings {
    let mut findings = Findings::new();
    match BASIC_LATIN.clone().find(|cp| !font.contains(*cp)) {
        Some(missing) => {
            let c = char::from_u32(missing).unwrap_or(char::REPLACEMENT_CHARACTER);
            findings.error(
                codepoint_field(missing),
                format!("missing glyph for ASCII character '{c}'"),
            );
        }
        None => findings.info("Basic Latin", "all characters present"),
    }
    findings
}

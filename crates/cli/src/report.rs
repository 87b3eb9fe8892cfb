//! Printing findings.

use std::io::{self, Write};

use mathfix_core::{Finding, Report, Severity};

/// Print a finding: checks that passed and synthesized glyphs go to stdout,
/// warnings and errors to stderr.
pub fn print_finding(finding: &Finding) {
    // A closed pipe is not worth failing the run over.
    let _ = match finding.severity {
        Severity::Info | Severity::Synthesized => writeln!(io::stdout().lock(), "{finding}"),
        Severity::Warning | Severity::Error => writeln!(io::stderr().lock(), "{finding}"),
    };
}

/// One-line tally of a report.
pub fn summary(report: &Report) -> String {
    format!(
        "{} errors, {} warnings, {} synthesized, {} passed",
        report.count(Severity::Error),
        report.count(Severity::Warning),
        report.count(Severity::Synthesized),
        report.count(Severity::Info),
    )
}

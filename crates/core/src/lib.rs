//! # mathfix core
//!
//! Validation and repair of OpenType MATH data: the scalar math constants,
//! size variants and glyph assemblies of stretchy constructions, display
//! sizes of large operators, italic corrections, `ssty` substitutions and
//! mathematical alphanumeric coverage.
//!
//! Every check reports [`Finding`]s. Repairs only fill in what is missing
//! and are all-or-nothing per constant, variant list, assembly or glyph.

pub mod auxiliary;
pub mod catalog;
pub mod config;
pub mod display;
pub mod finding;
pub mod metrics;
pub mod options;
pub mod pipeline;
pub mod variants;

#[cfg(test)]
mod test_fonts;

pub use auxiliary::validate_auxiliary;
pub use catalog::{CONSTRUCTIONS, Construction, LARGE_OPERATORS, MathStyle};
pub use display::LargeOperatorDisplaySizer;
pub use finding::{Finding, Findings, Severity};
pub use metrics::MetricsValidator;
pub use options::CheckOptions;
pub use pipeline::{Report, check_basic_latin, check_font};
pub use variants::VariantAssemblyBuilder;

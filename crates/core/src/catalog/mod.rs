//! Compiled-in code point tables.

mod alphanumerics;
mod constructions;
mod operators;

pub use alphanumerics::{MathStyle, fallback_base};
pub use constructions::{CONSTRUCTIONS, Construction, PartSpec};
pub use operators::{INTEGRALS, LARGE_OPERATORS, PRESCRIPTED_OPERATORS, expand};

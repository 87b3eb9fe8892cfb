//! mathfix CLI library.

pub mod cli;
pub mod io;
pub mod report;

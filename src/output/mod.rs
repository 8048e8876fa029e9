//! Program output formatting

pub mod text;

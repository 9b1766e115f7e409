//! Parsers for BOM and paste input formats.
//!
//! # Parsers
//!
//! - [`bom_parser`]: parse CSV bills of materials into components
//! - [`paste_parser`]: parse paste datasheet JSON into a specification

pub mod bom_parser;
pub mod paste_parser;

#[cfg(test)]
mod paste_parser_tests;

//! Error types and error handling for the parser.
//!
//! This module defines the error types used by the scanner and the parser.
//! It includes:
//!
//! - Error structures with source position information
//! - Scanner failures and the single parser failure kind, `SyntaxError`
//! - Helpful error messages and suggestions for rendering

pub mod errors;

#[cfg(test)]
mod tests;

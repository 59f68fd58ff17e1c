//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into the
//! classified token stream the parser consumes. It handles:
//!
//! - Tokenization of source code using an ordered regex pattern table
//! - Keywords, word operators, identifiers, literals and punctuation
//! - Regex literal versus division disambiguation
//! - Line-break tracking (`newline_before`) for semicolon insertion
//! - Comments, which are kept as tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

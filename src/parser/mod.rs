//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an arena-allocated tree. It handles:
//!
//! - Statement parsing (declarations, control flow, labels, switch bodies)
//! - Expression parsing (assignments, conditionals, binary ops, calls, literals)
//! - Automatic semicolon insertion unless semicolons are made mandatory
//!
//! Binary operators are parsed by precedence climbing over the binding
//! powers in `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch loop and newline runs
//! - `comment` - Single-line and nested multi-line comments
//! - `string` - String literals
//! - `number` - Integer and double literals
//! - `identifier` - Identifier and keyword lexing
//! - `operator` - Operators, adjacency checks and punctuation

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub(crate) use self::core::Lexer;

//! Command modules for the parleyt CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an args struct, a handler implementing [`traits::Command`], and a
//! `run_*` entry point.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};

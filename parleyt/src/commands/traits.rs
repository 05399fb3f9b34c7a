//! Command trait for the parleyt CLI.
//!
//! Every subcommand is a handler struct built from its arguments and run
//! through this trait.

#![allow(dead_code)]

use crate::error::Result;

/// Standard command trait that all parleyt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

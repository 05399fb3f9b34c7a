//! Common types and utilities for parleyt commands.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ParleytError, Result};

/// Name used for source read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for the `tokens` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table followed by the error list
    #[default]
    Table,
    /// JSON document with tokens, errors and error lines
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Source text together with the name used when reporting on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    /// File path as given, or [`STDIN_NAME`].
    pub name: String,
    /// Full source text.
    pub content: String,
}

/// Read the source to lex from `path`, or from standard input when `path`
/// is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<SourceInput> {
    match path {
        Some(path) if path != Path::new("-") => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                ParleytError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
            })?;
            Ok(SourceInput {
                name: path.display().to_string(),
                content,
            })
        },
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(SourceInput {
                name: STDIN_NAME.to_string(),
                content,
            })
        },
    }
}

/// Render a lexeme on one line: line breaks, tabs and carriage returns are
/// shown as escapes.
pub fn printable_lexeme(lexeme: &str) -> String {
    let mut out = String::with_capacity(lexeme.len());
    for c in lexeme.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

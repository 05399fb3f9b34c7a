//! Tokens command implementation.
//!
//! Lexes one source and prints its tokens and errors, either as an aligned
//! table or as a JSON document.

use std::path::PathBuf;

use parley_lex::{tokenize_with, LexOptions, Tokenized};
use serde_json::json;

use crate::commands::common::{printable_lexeme, read_source, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

const HEADERS: [&str; 3] = ["Lexeme", "Token", "Type"];

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source file; standard input when `None` or `-`.
    pub file: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Lexer options.
    pub options: LexOptions,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lex the source and render the report.
    fn run(&self) -> Result<String> {
        let input = read_source(self.args.file.as_deref())?;
        let result = tokenize_with(&input.content, &self.args.options);
        tracing::debug!(
            source = %input.name,
            tokens = result.tokens.len(),
            errors = result.errors.len(),
            "lexed source"
        );

        match self.args.format {
            OutputFormat::Table => Ok(render_table(&result)),
            OutputFormat::Json => render_json(&result),
        }
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Render the token table followed by the error list.
///
/// ```text
/// Lexeme | Token    | Type
/// -------+----------+---------
/// anchor | anchor   | KEYWORD
/// =      | OPERATOR | OPERATOR
/// ```
pub fn render_table(result: &Tokenized) -> String {
    let rows: Vec<[String; 3]> = result
        .tokens
        .iter()
        .map(|token| {
            [
                printable_lexeme(&token.lexeme),
                token.display_type().to_string(),
                token.category.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push('\n');
    if result.errors.is_empty() {
        out.push_str("No errors.\n");
    } else {
        out.push_str(&format!("Errors ({}):\n", result.errors.len()));
        for error in &result.errors {
            out.push_str(&format!("{}\n", error));
        }
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 3]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Render the tokens, errors and error lines as a JSON document.
pub fn render_json(result: &Tokenized) -> Result<String> {
    let document = json!({
        "tokens": result.tokens,
        "errors": result.errors,
        "error_lines": result.error_lines(),
    });
    let mut out = serde_json::to_string_pretty(&document)?;
    out.push('\n');
    Ok(out)
}

/// Run the tokens command and print its report to stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    print!("{}", command.execute()?);
    Ok(())
}

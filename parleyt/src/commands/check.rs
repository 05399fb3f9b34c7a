//! Check command implementation.
//!
//! Lexes one source and reports every error as a rendered diagnostic with
//! a source snippet. The command fails when any error is found.

use std::path::PathBuf;

use indexmap::IndexMap;
use parley_lex::{tokenize_with, LexOptions};
use parley_util::{DiagnosticCode, Handler, SourceFile};

use crate::commands::common::read_source;
use crate::commands::traits::Command;
use crate::error::{ParleytError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source file; standard input when `None` or `-`.
    pub file: Option<PathBuf>,
    /// Lexer options.
    pub options: LexOptions,
}

/// Outcome of checking one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Name of the checked source.
    pub source_name: String,
    /// Rendered diagnostics, in source order.
    pub rendered: String,
    /// Error count per code, in order of first occurrence.
    pub counts: IndexMap<DiagnosticCode, usize>,
}

impl CheckReport {
    /// Total number of errors.
    pub fn error_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// One-line summary, e.g. `2 lexical error(s): E002 x1, E004 x1`.
    pub fn summary(&self) -> String {
        if self.counts.is_empty() {
            return format!("{}: no lexical errors", self.source_name);
        }
        let per_code: Vec<String> = self
            .counts
            .iter()
            .map(|(code, count)| format!("{} x{}", code, count))
            .collect();
        format!(
            "{} lexical error(s): {}",
            self.error_count(),
            per_code.join(", ")
        )
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Lex the source and collect its diagnostics.
    fn run(&self) -> Result<CheckReport> {
        let input = read_source(self.args.file.as_deref())?;
        let result = tokenize_with(&input.content, &self.args.options);

        let handler = Handler::new();
        for error in &result.errors {
            handler.emit_diagnostic(error.to_diagnostic());
        }

        let file = SourceFile::new(input.name, input.content);
        let mut rendered = String::new();
        let mut counts: IndexMap<DiagnosticCode, usize> = IndexMap::new();
        for diagnostic in handler.diagnostics() {
            rendered.push_str(&diagnostic.render(&file));
            rendered.push('\n');
            if let Some(code) = diagnostic.code {
                *counts.entry(code).or_insert(0) += 1;
            }
        }

        tracing::debug!(
            source = %file.name(),
            errors = handler.error_count(),
            "checked source"
        );

        Ok(CheckReport {
            source_name: file.name().to_string(),
            rendered,
            counts,
        })
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
///
/// Diagnostics and the summary go to stderr. Returns
/// [`ParleytError::Lex`] when the source has errors.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let command = CheckCommand::new(args);
    let report = command.execute()?;

    if report.counts.is_empty() {
        println!("{}", report.summary());
        return Ok(());
    }

    eprint!("{}", report.rendered);
    eprintln!("{}", report.summary());
    Err(ParleytError::Lex {
        source_name: report.source_name.clone(),
        count: report.error_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn check_source(source: &str, options: LexOptions) -> CheckReport {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("voyage.parley");
        std::fs::write(&path, source).unwrap();

        CheckCommand::new(CheckArgs {
            file: Some(path),
            options,
        })
        .execute()
        .unwrap()
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(<CheckCommand as Command>::name(), "check");
    }

    #[test]
    fn test_clean_source() {
        let report = check_source("anchor gold = 42\n", LexOptions::default());
        assert_eq!(report.error_count(), 0);
        assert!(report.rendered.is_empty());
        assert!(report.summary().ends_with("voyage.parley: no lexical errors"));
    }

    #[test]
    fn test_rendered_diagnostic() {
        let report = check_source("ask 5.5.5\n", LexOptions::default());
        assert_eq!(report.error_count(), 1);
        assert!(report.rendered.starts_with(
            "error[E002]: Malformed number literal: multiple decimal points ('5.5.5')\n"
        ));
        assert!(report.rendered.contains("voyage.parley:1:5\n"));
        assert!(report.rendered.contains("  1 | ask 5.5.5\n"));
        assert!(report.rendered.contains("    |     ^^^^^\n"));
        assert!(report.rendered.contains("  = help: "));
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let report = check_source("== != 5a\nx = = @\n", LexOptions::default());
        let codes: Vec<String> = report.counts.keys().map(|c| c.to_string()).collect();
        assert_eq!(codes, ["E004", "E003", "E000"]);
        assert_eq!(report.counts[&DiagnosticCode::new("E", 4)], 2);
        assert_eq!(report.summary(), "4 lexical error(s): E004 x2, E003 x1, E000 x1");
    }

    #[test]
    fn test_strict_comments() {
        let source = "<<< open <<< nested >>>\n";
        assert_eq!(check_source(source, LexOptions::default()).error_count(), 0);

        let strict = LexOptions {
            report_unterminated_comments: true,
        };
        let report = check_source(source, strict);
        assert_eq!(report.error_count(), 1);
        assert!(report.rendered.starts_with("error[E005]"));
    }

    #[test]
    fn test_run_check_fails_on_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.parley");
        std::fs::write(&path, "\"open").unwrap();

        let result = run_check(CheckArgs {
            file: Some(path),
            options: LexOptions::default(),
        });
        assert!(matches!(result, Err(ParleytError::Lex { count: 1, .. })));
    }
}

//! Parleyt CLI - command-line front end for the Parley lexer.
//!
//! This is the main entry point for the parleyt CLI application.
//! It uses clap for argument parsing and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{ParleytError, Result};

/// Parleyt - tokenize and check Parley scripts
#[derive(Parser, Debug)]
#[command(name = "parleyt")]
#[command(author = "Parley Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check Parley scripts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PARLEYT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PARLEYT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PARLEYT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the parleyt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens and errors of a source file
    ///
    /// Reads FILE (or standard input) and prints a token table followed by
    /// the error list, or a JSON document.
    Tokens(TokensCommand),

    /// Report lexical errors with source snippets
    ///
    /// Exits with a non-zero status when any error is found.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file (default: standard input; `-` also reads stdin)
    file: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Report multi-line comments left open at end of input
    #[arg(long)]
    strict_comments: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file (default: standard input; `-` also reads stdin)
    file: Option<PathBuf>,

    /// Report multi-line comments left open at end of input
    #[arg(long)]
    strict_comments: bool,
}

/// Main entry point for the parleyt CLI.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Load configuration, initialize logging and run the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let verbose = cli.verbose || config.verbose;
    let no_color = cli.no_color || !config.output.color;
    init_logging(verbose, no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ParleytError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, &config),
        Commands::Check(args) => execute_check(args, &config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        file: args.file,
        format: args.format.unwrap_or(config.output.format),
        options: config.lexer.options(args.strict_comments),
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        file: args.file,
        options: config.lexer.options(args.strict_comments),
    };
    run_check(check_args)
}

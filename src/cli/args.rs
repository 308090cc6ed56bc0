//! Command line argument parsing for the Quill CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Quill - rule-based and dictionary-based text correction
#[derive(Parser, Debug, Clone)]
#[command(name = "quill")]
#[command(about = "Rule-based and dictionary-based text correction")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuillArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuillArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a text or a file
    Check(CheckArgs),

    /// List the rule names configured in a rule file
    Rules(RulesArgs),
}

/// Arguments for correcting text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text to correct
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file to correct
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Rule definition file (JSON: {"rules": [{"name", "pattern", "corrections"}]})
    #[arg(short, long, value_name = "RULES_FILE")]
    pub rules_file: Option<PathBuf>,

    /// Dictionary word file (whitespace-delimited); built-in vocabulary is
    /// used when omitted or unreadable
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Rule names to apply, including the reserved name "dictionary";
    /// defaults to every configured rule plus the dictionary pass
    #[arg(short, long = "select", value_name = "RULE")]
    pub select: Vec<String>,
}

/// Arguments for listing rules
#[derive(Parser, Debug, Clone)]
pub struct RulesArgs {
    /// Rule definition file (JSON)
    #[arg(short, long, value_name = "RULES_FILE")]
    pub rules_file: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

//! Command implementations for the Quill CLI.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cli::args::*;
use crate::corrector::{CorrectionResult, DICTIONARY_RULE, TextCorrector};
use crate::error::{QuillError, Result};
use crate::rules::{Rule, RuleSet};
use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};

/// On-disk rule file format.
#[derive(Debug, Deserialize)]
struct RuleFile {
    rules: Vec<Rule>,
}

/// Execute a CLI command.
pub fn execute_command(args: QuillArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_text(check_args.clone(), &args),
        Command::Rules(rules_args) => list_rules(rules_args.clone(), &args),
    }
}

/// Load and compile a rule file; an absent path means no rules.
fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let file: RuleFile = serde_json::from_str(&content)?;
            RuleSet::compile(file.rules)
        }
        None => Ok(RuleSet::new()),
    }
}

/// Load a dictionary file, falling back to the built-in vocabulary.
fn load_dictionary(path: Option<&Path>) -> SpellingDictionary {
    match path {
        Some(path) => SpellingDictionary::load_or_builtin(path),
        None => BuiltinDictionary::english(),
    }
}

/// Correct a text or file.
fn check_text(args: CheckArgs, cli_args: &QuillArgs) -> Result<()> {
    let text = match (args.text, &args.input) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(QuillError::invalid_argument(
                "either --text or --input is required",
            ));
        }
    };

    let rules = load_rules(args.rules_file.as_deref())?;
    let dictionary = load_dictionary(args.dictionary.as_deref());

    // Default selection: every configured rule plus the dictionary pass.
    let selected = if args.select.is_empty() {
        let mut names: Vec<String> = rules.names().iter().map(|n| n.to_string()).collect();
        names.push(DICTIONARY_RULE.to_string());
        names
    } else {
        args.select
    };

    let corrector = TextCorrector::new(dictionary, rules);
    let result = corrector.check(&text, &selected);

    print_result(&result, cli_args)
}

/// Print a correction result in the requested format.
fn print_result(result: &CorrectionResult, cli_args: &QuillArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => {
            let output = if cli_args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{output}");
        }
        OutputFormat::Human => {
            println!("{}", result.corrected_text);

            if cli_args.verbosity() >= 2 && !result.errors.is_empty() {
                println!();
                println!("{} error(s) found:", result.stats.total_errors);
                for error in &result.errors {
                    println!(
                        "  [{}] {} -> {} ({}..{})",
                        error.rule, error.word, error.correction, error.start, error.end
                    );
                }
            }
        }
    }

    Ok(())
}

/// List the rule names configured in a rule file.
fn list_rules(args: RulesArgs, cli_args: &QuillArgs) -> Result<()> {
    let rules = load_rules(Some(&args.rules_file))?;

    match cli_args.output_format {
        OutputFormat::Json => {
            let output = if cli_args.pretty {
                serde_json::to_string_pretty(&rules.names())?
            } else {
                serde_json::to_string(&rules.names())?
            };
            println!("{output}");
        }
        OutputFormat::Human => {
            for name in rules.names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

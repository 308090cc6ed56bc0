//! Whole-text correction tying the rule engine and the dictionary pass
//! together.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::suggest::{Candidate, SuggestionConfig, SuggestionEngine};

/// Reserved rule name that enables the dictionary-based pass.
pub const DICTIONARY_RULE: &str = "dictionary";

/// A flagged span of text with its proposed correction.
///
/// `start`/`end` are a half-open byte range into the text as it stood at the
/// start of the pass that produced this error, not into the final corrected
/// text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingError {
    /// The matched word.
    pub word: String,
    /// All considered corrections with their scores.
    pub candidates: Vec<Candidate>,
    /// The correction that was (or would have been) applied.
    pub correction: String,
    /// Start offset of the match.
    pub start: usize,
    /// End offset of the match (exclusive).
    pub end: usize,
    /// Name of the rule that produced this error, or `"dictionary"`.
    pub rule: String,
}

/// Summary statistics over a correction result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionStats {
    /// Total number of errors found.
    pub total_errors: usize,
    /// Error count per producing rule name.
    pub error_types: HashMap<String, usize>,
}

impl CorrectionStats {
    fn from_errors(errors: &[SpellingError]) -> Self {
        let mut error_types: HashMap<String, usize> = HashMap::new();
        for error in errors {
            *error_types.entry(error.rule.clone()).or_insert(0) += 1;
        }

        CorrectionStats {
            total_errors: errors.len(),
            error_types,
        }
    }
}

/// Result of correcting a whole text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// The text as passed in.
    pub original_text: String,
    /// The text after all enabled passes.
    pub corrected_text: String,
    /// Rule errors first, then dictionary errors.
    pub errors: Vec<SpellingError>,
    /// Summary statistics.
    pub stats: CorrectionStats,
}

/// A queued text replacement in snapshot coordinates.
#[derive(Debug, Clone)]
struct TextEdit {
    start: usize,
    end: usize,
    replacement: String,
}

/// The main text corrector.
///
/// Owns a read-only dictionary and rule set; `check` takes `&self`, so one
/// instance can serve concurrent callers without locking.
pub struct TextCorrector {
    rules: RuleSet,
    engine: SuggestionEngine,
}

impl TextCorrector {
    /// Create a new corrector from a dictionary and a compiled rule set.
    pub fn new(dictionary: SpellingDictionary, rules: RuleSet) -> Self {
        TextCorrector {
            rules,
            engine: SuggestionEngine::new(dictionary),
        }
    }

    /// Create a new corrector with custom suggestion configuration.
    pub fn with_config(
        dictionary: SpellingDictionary,
        rules: RuleSet,
        config: SuggestionConfig,
    ) -> Self {
        TextCorrector {
            rules,
            engine: SuggestionEngine::with_config(dictionary, config),
        }
    }

    /// Access the configured rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Access the suggestion engine.
    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Correct a text using the selected rules.
    ///
    /// `selected_rules` names the pattern rules to apply (case-sensitive),
    /// plus optionally the reserved name `"dictionary"` to enable the
    /// dictionary-based pass over the rule pass's output. Correction never
    /// fails: per-token and per-rule problems are data in the result.
    pub fn check(&self, text: &str, selected_rules: &[String]) -> CorrectionResult {
        let mut rule_names = Vec::new();
        let mut dictionary_enabled = false;
        for name in selected_rules {
            if name == DICTIONARY_RULE {
                dictionary_enabled = true;
            } else {
                rule_names.push(name.clone());
            }
        }

        let (after_rules, mut errors) = self.rules.apply(text, &rule_names);

        let corrected = if dictionary_enabled {
            let (dictionary_corrected, dictionary_errors) = self.dictionary_pass(&after_rules);
            errors.extend(dictionary_errors);
            dictionary_corrected
        } else {
            after_rules
        };

        let stats = CorrectionStats::from_errors(&errors);

        CorrectionResult {
            original_text: text.to_string(),
            corrected_text: corrected,
            errors,
            stats,
        }
    }

    /// Run the dictionary-based pass over a text.
    ///
    /// Every token is evaluated independently, so a recurring misspelling is
    /// corrected at each occurrence (unlike the rule pass, which corrects a
    /// matched string once per pass). Tokens with no qualifying candidate are
    /// left unchanged and produce no error record.
    fn dictionary_pass(&self, text: &str) -> (String, Vec<SpellingError>) {
        let mut errors = Vec::new();
        let mut edits = Vec::new();

        for (start, end, token) in tokenize(text) {
            let lower = token.to_lowercase();
            if self.engine.is_correct(&lower) {
                continue;
            }

            let candidates = self.engine.candidates(&lower);
            let Some(best) = candidates.first() else {
                continue;
            };

            let replacement = adapt_case(token, &best.word);
            errors.push(SpellingError {
                word: token.to_string(),
                candidates: candidates.clone(),
                correction: replacement.clone(),
                start,
                end,
                rule: DICTIONARY_RULE.to_string(),
            });
            edits.push(TextEdit {
                start,
                end,
                replacement,
            });
        }

        (apply_edits(text, edits), errors)
    }
}

/// Tokenize a text into maximal alphanumeric runs with byte offsets.
fn tokenize(text: &str) -> Vec<(usize, usize, &str)> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start.take() {
            tokens.push((start, i, &text[start..i]));
        }
    }
    if let Some(start) = run_start {
        tokens.push((start, text.len(), &text[start..]));
    }

    tokens
}

/// Apply non-overlapping edits, all addressed in the input text's
/// coordinates, in descending start order.
///
/// Right-to-left application keeps every remaining edit's offsets valid as
/// replacement lengths differ from the spans they replace; any left-to-right
/// order would invalidate later offsets after the first length-changing
/// splice.
fn apply_edits(text: &str, mut edits: Vec<TextEdit>) -> String {
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut corrected = text.to_string();
    for edit in edits {
        corrected.replace_range(edit.start..edit.end, &edit.replacement);
    }
    corrected
}

/// Adapt a lower-cased suggestion to the casing of the original token.
fn adapt_case(original: &str, suggestion: &str) -> String {
    if !original.is_empty() && original.chars().all(|c| c.is_uppercase()) {
        return suggestion.to_uppercase();
    }

    if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut chars = suggestion.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
    }

    suggestion.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rule, RuleSet};
    use crate::spelling::dictionary::BuiltinDictionary;

    fn corrector_with_rules(rules: Vec<Rule>) -> TextCorrector {
        TextCorrector::new(
            BuiltinDictionary::minimal(),
            RuleSet::compile(rules).unwrap(),
        )
    }

    fn dictionary_only() -> Vec<String> {
        vec![DICTIONARY_RULE.to_string()]
    }

    #[test]
    fn test_tokenize_offsets() {
        let tokens = tokenize("Helo, wrld! x2");
        assert_eq!(
            tokens,
            vec![(0, 4, "Helo"), (6, 10, "wrld"), (12, 14, "x2")]
        );

        assert!(tokenize("...").is_empty());
        assert_eq!(tokenize("end"), vec![(0, 3, "end")]);
    }

    #[test]
    fn test_apply_edits_right_to_left() {
        // Replacement lengths differ from the spans they replace; offsets
        // stay valid because application runs in descending start order.
        let edits = vec![
            TextEdit {
                start: 0,
                end: 2,
                replacement: "xxxx".to_string(),
            },
            TextEdit {
                start: 6,
                end: 8,
                replacement: "y".to_string(),
            },
        ];
        assert_eq!(apply_edits("ab cd ef", edits), "xxxx cd y");
    }

    #[test]
    fn test_adapt_case() {
        assert_eq!(adapt_case("helo", "hello"), "hello");
        assert_eq!(adapt_case("Helo", "hello"), "Hello");
        assert_eq!(adapt_case("HELO", "hello"), "HELLO");
        assert_eq!(adapt_case("", "hello"), "hello");
    }

    #[test]
    fn test_dictionary_pass_corrects_tokens() {
        let corrector = corrector_with_rules(vec![]);

        let result = corrector.check("helo wrld", &dictionary_only());
        assert_eq!(result.corrected_text, "hello world");
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].rule, DICTIONARY_RULE);
        assert_eq!(result.stats.total_errors, 2);
        assert_eq!(result.stats.error_types[DICTIONARY_RULE], 2);
    }

    #[test]
    fn test_dictionary_pass_is_per_token() {
        let corrector = corrector_with_rules(vec![]);

        // Unlike the rule pass, a recurring misspelling is corrected at
        // every occurrence.
        let result = corrector.check("recieve recieve", &dictionary_only());
        assert_eq!(result.corrected_text, "receive receive");
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].start, 0);
        assert_eq!(result.errors[1].start, 8);
    }

    #[test]
    fn test_dictionary_pass_case_adaptation() {
        let corrector = corrector_with_rules(vec![]);

        let result = corrector.check("Helo WRLD", &dictionary_only());
        assert_eq!(result.corrected_text, "Hello WORLD");
    }

    #[test]
    fn test_no_candidate_is_silent() {
        let corrector = corrector_with_rules(vec![]);

        // Nothing qualifies for this token; it passes through with no error
        // record, indistinguishable from a correct word.
        let result = corrector.check("xqzjkw hello", &dictionary_only());
        assert_eq!(result.corrected_text, "xqzjkw hello");
        assert!(result.errors.is_empty());
        assert_eq!(result.stats.total_errors, 0);
    }

    #[test]
    fn test_valid_words_untouched() {
        let corrector = corrector_with_rules(vec![]);

        let result = corrector.check("hello world", &dictionary_only());
        assert_eq!(result.corrected_text, "hello world");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_rule_pass_without_dictionary() {
        let corrector = corrector_with_rules(vec![Rule::new(
            "teh_rule",
            "teh",
            vec!["the".to_string()],
        )]);

        let result = corrector.check("teh cat sat", &["teh_rule".to_string()]);
        assert_eq!(result.corrected_text, "the cat sat");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].rule, "teh_rule");
        assert_eq!(result.stats.error_types["teh_rule"], 1);
    }

    #[test]
    fn test_rule_errors_precede_dictionary_errors() {
        let corrector = corrector_with_rules(vec![Rule::new(
            "teh_rule",
            "teh",
            vec!["the".to_string()],
        )]);

        let selected = vec!["teh_rule".to_string(), DICTIONARY_RULE.to_string()];
        let result = corrector.check("teh helo", &selected);
        assert_eq!(result.corrected_text, "the hello");
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].rule, "teh_rule");
        assert_eq!(result.errors[1].rule, DICTIONARY_RULE);
        assert_eq!(result.stats.total_errors, 2);
    }

    #[test]
    fn test_result_serialization_field_names() {
        let corrector = corrector_with_rules(vec![]);
        let result = corrector.check("helo", &dictionary_only());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("original_text").is_some());
        assert!(json.get("corrected_text").is_some());
        assert!(json.get("errors").is_some());
        assert!(json["stats"].get("total_errors").is_some());
        assert!(json["stats"].get("error_types").is_some());

        let error = &json["errors"][0];
        assert_eq!(error["word"], "helo");
        assert_eq!(error["rule"], "dictionary");
        assert!(error.get("start").is_some());
        assert!(error.get("end").is_some());
    }
}

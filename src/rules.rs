//! Pattern-based correction rules.
//!
//! A rule maps a pattern (always treated as a regex; a literal string is a
//! degenerate regex) to an ordered list of candidate corrections. Applying a
//! rule set rewrites whole-word matches with the correction most similar to
//! the matched text.

use ahash::AHashSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::corrector::SpellingError;
use crate::error::{QuillError, Result};
use crate::spelling::similarity::sequence_ratio;
use crate::spelling::suggest::Candidate;

/// A single correction rule as supplied by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Unique rule name, also used to tag errors it produces.
    pub name: String,
    /// Pattern to match, literal or regex.
    pub pattern: String,
    /// Ordered candidate corrections; may be empty, which flags matches
    /// without rewriting them.
    #[serde(default)]
    pub corrections: Vec<String>,
}

impl Rule {
    /// Create a new rule.
    pub fn new<S: Into<String>>(name: S, pattern: S, corrections: Vec<String>) -> Self {
        Rule {
            name: name.into(),
            pattern: pattern.into(),
            corrections,
        }
    }
}

/// A rule with its compiled pattern.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: Rule,
    regex: Regex,
}

/// An ordered, compiled set of correction rules, read-only after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        RuleSet { rules: Vec::new() }
    }

    /// Compile a collection of rules, preserving their order.
    ///
    /// A malformed pattern is a configuration error naming the offending
    /// rule; no rule from the collection is applied in that case.
    pub fn compile(rules: Vec<Rule>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            let regex = Regex::new(&rule.pattern).map_err(|e| {
                QuillError::rule(format!("invalid pattern in rule '{}': {e}", rule.name))
            })?;
            compiled.push(CompiledRule { rule, regex });
        }

        Ok(RuleSet { rules: compiled })
    }

    /// Get the names of all configured rules, in order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.rule.name.as_str()).collect()
    }

    /// Get the number of configured rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the selected rules to the text.
    ///
    /// Rules run in rule-set order, each against the text as corrected so
    /// far, so later rules see earlier rules' edits. Per match the engine
    /// skips anything already corrected in this pass (first occurrence of a
    /// matched string wins) and anything that is not a whole word, then
    /// splices in the correction most similar to the matched text. Error
    /// offsets are byte ranges into the text snapshot the rule matched
    /// against, not the final corrected text.
    pub fn apply(&self, text: &str, selected: &[String]) -> (String, Vec<SpellingError>) {
        let mut corrected = text.to_string();
        let mut errors = Vec::new();
        // Matched substrings already handled in this pass, across all rules.
        let mut already_matched: AHashSet<String> = AHashSet::new();

        for compiled in self
            .rules
            .iter()
            .filter(|r| selected.iter().any(|name| *name == r.rule.name))
        {
            let snapshot = corrected;
            let mut output = String::with_capacity(snapshot.len());
            let mut last_end = 0;

            for m in compiled.regex.find_iter(&snapshot) {
                let matched = m.as_str();

                if already_matched.contains(matched)
                    || !is_whole_word(&snapshot, m.start(), m.end())
                {
                    continue;
                }

                let (best, candidates) = best_correction(matched, &compiled.rule.corrections);

                output.push_str(&snapshot[last_end..m.start()]);
                let correction = match best {
                    Some(best) => {
                        output.push_str(&best);
                        best
                    }
                    // Empty corrections list: flagged, but not rewritten.
                    None => {
                        output.push_str(matched);
                        matched.to_string()
                    }
                };
                last_end = m.end();

                already_matched.insert(matched.to_string());
                errors.push(SpellingError {
                    word: matched.to_string(),
                    candidates,
                    correction,
                    start: m.start(),
                    end: m.end(),
                    rule: compiled.rule.name.clone(),
                });
            }

            output.push_str(&snapshot[last_end..]);
            corrected = output;
        }

        (corrected, errors)
    }
}

/// Pick the correction most similar to the matched text.
///
/// Returns the best correction (first wins on ties) and the full candidate
/// list with similarity scores, in rule order. `None` when the rule carries
/// no corrections.
fn best_correction(matched: &str, corrections: &[String]) -> (Option<String>, Vec<Candidate>) {
    let mut best: Option<(usize, f64)> = None;
    let mut candidates = Vec::with_capacity(corrections.len());

    for (i, correction) in corrections.iter().enumerate() {
        let similarity = sequence_ratio(matched, correction);
        candidates.push(Candidate::new(correction.clone(), similarity));

        if best.is_none_or(|(_, score)| similarity > score) {
            best = Some((i, similarity));
        }
    }

    (best.map(|(i, _)| corrections[i].clone()), candidates)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check that a match is bounded by non-word characters (or text edges) on
/// both sides. Partial-token matches are never corrected.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    before.is_none_or(|c| !is_word_char(c)) && after.is_none_or(|c| !is_word_char(c))
}

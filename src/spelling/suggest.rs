//! Candidate generation and scoring for spelling correction.

use std::cmp::Ordering;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::similarity::{charset_overlap, sequence_ratio};

/// A vocabulary word proposed as a correction, with a composite similarity
/// score in [0.0, 1.0] (higher is better).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The suggested word.
    pub word: String,
    /// Composite similarity score.
    pub score: f64,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(word: String, score: f64) -> Self {
        Candidate { word, score }
    }
}

/// Configuration for candidate generation.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Maximum number of candidates to return.
    pub max_candidates: usize,
    /// Candidates scoring at or below this are discarded.
    pub score_threshold: f64,
    /// Minimum sequence similarity for substring candidates.
    pub substring_similarity_floor: f64,
    /// Score multiplier for substring candidates, keeping them below
    /// edit-distance matches.
    pub substring_discount: f64,
    /// Tokens longer than this skip the edit-distance-2 fallback.
    pub max_token_len_for_edit2: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_candidates: 10,
            score_threshold: 0.59,
            substring_similarity_floor: 0.6,
            substring_discount: 0.3,
            max_token_len_for_edit2: 20,
        }
    }
}

/// Generates and scores correction candidates for out-of-vocabulary words.
pub struct SuggestionEngine {
    dictionary: SpellingDictionary,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new(dictionary: SpellingDictionary) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: SpellingDictionary, config: SuggestionConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    /// Check if a word exists in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Access the underlying dictionary.
    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }

    /// Generate ranked correction candidates for a word.
    ///
    /// A word already in the dictionary returns itself as the sole candidate
    /// with score 1.0. Otherwise candidates come from the edit-distance-1
    /// neighborhood, falling back to edit-distance-2 only when that finds
    /// nothing, always merged with discounted substring matches. Candidates
    /// scoring at or below the threshold are dropped; the rest are sorted by
    /// descending score and truncated. An empty result means no vocabulary
    /// word qualified.
    pub fn candidates(&self, word: &str) -> Vec<Candidate> {
        let word = word.to_lowercase();

        if self.dictionary.contains(&word) {
            return vec![Candidate::new(word, 1.0)];
        }

        // Maximum score seen per candidate word.
        let mut scored: AHashMap<String, f64> = AHashMap::new();
        let record = |candidate: &str, score: f64, scored: &mut AHashMap<String, f64>| {
            let entry = scored.entry(candidate.to_string()).or_insert(score);
            if score > *entry {
                *entry = score;
            }
        };

        let edit1: Vec<String> = single_edits(&word)
            .into_iter()
            .filter(|w| self.dictionary.contains(w))
            .collect();

        for candidate in &edit1 {
            let score = self.score(&word, candidate, 1);
            record(candidate, score, &mut scored);
        }

        // The distance-2 neighborhood is O(n^2 * 26^2); only pay for it when
        // distance 1 found nothing, and never for very long tokens.
        if edit1.is_empty() && word.chars().count() <= self.config.max_token_len_for_edit2 {
            for first in single_edits(&word) {
                for second in single_edits(&first) {
                    if self.dictionary.contains(&second) {
                        let score = self.score(&word, &second, 2);
                        record(&second, score, &mut scored);
                    }
                }
            }
        }

        for (candidate, score) in self.substring_candidates(&word) {
            record(&candidate, score, &mut scored);
        }

        let mut result: Vec<Candidate> = scored
            .into_iter()
            .filter(|(_, score)| *score > self.config.score_threshold)
            .map(|(word, score)| Candidate::new(word, score))
            .collect();

        result.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        result.truncate(self.config.max_candidates);
        result
    }

    /// Calculate the composite similarity score for a candidate.
    ///
    /// Weighted sum of sequence similarity (0.4), inverse edit distance (0.1),
    /// frequency (0.1), length proximity (0.1), and character-set overlap
    /// (0.3), clamped to [0.0, 1.0].
    pub fn score(&self, original: &str, candidate: &str, edit_distance: usize) -> f64 {
        let seq_score = sequence_ratio(original, candidate);
        let distance_score = 1.0 / (edit_distance as f64 + 1.0);
        let freq_score = self.dictionary.frequency(candidate) as f64 / 100.0;

        let len_diff = original.chars().count().abs_diff(candidate.chars().count());
        let len_score = 1.0 / (len_diff as f64 + 1.0);

        let overlap_score = charset_overlap(original, candidate);

        let score = seq_score * 0.4
            + distance_score * 0.1
            + freq_score * 0.1
            + len_score * 0.1
            + overlap_score * 0.3;

        score.min(1.0)
    }

    /// Find vocabulary words related to `word` by substring containment.
    ///
    /// Catches truncations and concatenations that edit operations miss.
    /// Scores are discounted so a substring match never outranks a true
    /// near-miss.
    fn substring_candidates(&self, word: &str) -> Vec<(String, f64)> {
        let mut candidates = Vec::new();

        for dict_word in self.dictionary.words() {
            if word.contains(dict_word) || dict_word.contains(word) {
                let similarity = sequence_ratio(word, dict_word);
                if similarity > self.config.substring_similarity_floor {
                    candidates.push((
                        dict_word.to_string(),
                        similarity * self.config.substring_discount,
                    ));
                }
            }
        }

        candidates
    }
}

/// Generate the edit-distance-1 neighborhood of a word: every string
/// reachable by one deletion, one adjacent transposition, one substitution,
/// or one insertion of a lowercase ASCII letter.
pub fn single_edits(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = AHashSet::new();

    // Deletions
    for i in 0..len {
        let mut edited = chars.clone();
        edited.remove(i);
        edits.insert(edited.into_iter().collect());
    }

    // Adjacent transpositions
    for i in 0..len.saturating_sub(1) {
        let mut edited = chars.clone();
        edited.swap(i, i + 1);
        edits.insert(edited.into_iter().collect());
    }

    // Substitutions
    for i in 0..len {
        for ch in 'a'..='z' {
            if ch != chars[i] {
                let mut edited = chars.clone();
                edited[i] = ch;
                edits.insert(edited.into_iter().collect());
            }
        }
    }

    // Insertions
    for i in 0..=len {
        for ch in 'a'..='z' {
            let mut edited = chars.clone();
            edited.insert(i, ch);
            edits.insert(edited.into_iter().collect());
        }
    }

    edits
}

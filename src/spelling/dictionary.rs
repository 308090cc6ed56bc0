//! Dictionary storage for spelling correction.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;

/// A read-only vocabulary with a frequency weight per word.
///
/// Words are lower-cased on insertion, so membership tests are
/// case-insensitive. The dictionary is populated once at construction and
/// never mutated afterwards, which makes a shared instance safe for
/// concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Lower-cased words and their frequency weights.
    words: AHashMap<String, u32>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            words: AHashMap::new(),
        }
    }

    /// Add a word to the dictionary with the given frequency weight.
    ///
    /// The word is lower-cased; adding the same word twice keeps the latest
    /// weight.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.words.insert(word.to_lowercase(), frequency);
    }

    /// Check if a word exists in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency weight of a word, defaulting to 1 when absent.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(1)
    }

    /// Iterate over all words in the dictionary.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(|w| w.as_str())
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Build a dictionary from a whitespace/newline-delimited word blob.
    ///
    /// Words are lower-cased and deduplicated; every word gets weight 1.
    pub fn from_text(text: &str) -> Self {
        let mut dictionary = SpellingDictionary::new();

        for word in text.split_whitespace() {
            let word = word.trim();
            if !word.is_empty() {
                dictionary.add_word(word, 1);
            }
        }

        dictionary
    }

    /// Load a dictionary from a whitespace/newline-delimited word file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Load a dictionary from a file, falling back to the built-in English
    /// vocabulary when the file is missing or unreadable.
    ///
    /// A missing dictionary source is never a hard failure.
    pub fn load_or_builtin<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path) {
            Ok(dictionary) => dictionary,
            Err(_) => BuiltinDictionary::english(),
        }
    }
}

/// Built-in fallback dictionaries.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// The built-in English fallback vocabulary: common technical terms plus
    /// everyday function words, all with weight 1.
    pub fn english() -> SpellingDictionary {
        let words = [
            "technology", "computer", "software", "hardware", "internet", "network", "server",
            "client", "database", "cloud", "storage", "security", "encryption", "firewall",
            "protocol", "router", "switch", "modem", "bandwidth", "latency", "ethernet",
            "wireless", "bluetooth", "wifi", "browser", "website", "web", "application", "app",
            "mobile", "desktop", "laptop", "tablet", "device", "gadget", "smartphone", "android",
            "ios", "windows", "linux", "macos", "unix", "python", "java", "javascript",
            "typescript", "csharp", "ruby", "perl", "php", "swift", "kotlin", "go", "rust",
            "scala", "matlab", "sql", "html", "css", "json", "xml", "variable", "function",
            "method", "class", "object", "inheritance", "polymorphism", "encapsulation",
            "abstraction", "interface", "module", "package", "library", "framework", "api",
            "sdk", "repository", "git", "github", "bitbucket", "commit", "push", "pull",
            "branch", "merge", "clone", "fork", "algorithm", "data", "structure", "array",
            "list", "tuple", "set", "dictionary", "hashmap", "queue", "stack", "tree", "graph",
            "node", "edge", "vertex", "search", "sort", "binary", "recursion", "iteration",
            "loop", "condition", "if", "else", "elif", "for", "while", "break", "continue",
            "return", "error", "exception", "try", "except", "finally", "debug", "trace", "log",
            "warning", "info", "fatal", "compile", "execute", "run", "build", "deploy", "test",
            "unit", "integration", "system", "acceptance", "automation", "script", "shell",
            "command", "terminal", "console", "prompt", "argument", "parameter", "option",
            "flag", "environment", "config", "configuration", "setting", "preference", "the",
            "and", "or", "not", "in", "is", "this", "that", "these", "those", "a", "an", "to",
            "of", "with", "by", "from", "about", "into", "through", "during", "before", "after",
            "above", "below", "up", "down", "out", "off", "over", "under", "again", "further",
            "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
            "both", "each", "few", "more", "most", "other", "some", "such", "only", "own",
            "same", "so", "than", "too", "very", "can", "will", "just", "should", "now",
        ];

        let mut dict = SpellingDictionary::new();
        for word in words {
            dict.add_word(word, 1);
        }

        dict
    }

    /// Create a minimal dictionary for testing.
    pub fn minimal() -> SpellingDictionary {
        let words = [
            "hello",
            "world",
            "receive",
            "search",
            "query",
            "text",
            "word",
            "spell",
            "correct",
            "suggestion",
            "dictionary",
            "language",
            "english",
            "computer",
            "program",
            "software",
            "system",
            "data",
            "information",
            "process",
            "result",
            "value",
            "number",
            "string",
            "character",
        ];

        let mut dict = SpellingDictionary::new();
        for word in words {
            dict.add_word(word, 1);
        }

        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = SpellingDictionary::new();

        assert!(!dict.contains("hello"));
        assert_eq!(dict.word_count(), 0);

        dict.add_word("hello", 5);
        assert!(dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 5);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn test_dictionary_case_insensitive() {
        let mut dict = SpellingDictionary::new();

        dict.add_word("Hello", 5);
        assert!(dict.contains("hello"));
        assert!(dict.contains("HELLO"));
        assert!(dict.contains("Hello"));
        assert_eq!(dict.frequency("HELLO"), 5);
    }

    #[test]
    fn test_frequency_defaults_to_one() {
        let dict = SpellingDictionary::new();
        assert_eq!(dict.frequency("nonexistent"), 1);
    }

    #[test]
    fn test_from_text_dedupes_and_lowercases() {
        let dict = SpellingDictionary::from_text("Hello world\nHELLO\tworld  cat");

        assert_eq!(dict.word_count(), 3);
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(dict.contains("cat"));
        assert_eq!(dict.frequency("hello"), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello world").unwrap();
        writeln!(temp_file, "cat").unwrap();
        temp_file.flush().unwrap();

        let dict = SpellingDictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dict.word_count(), 3);
        assert!(dict.contains("cat"));
    }

    #[test]
    fn test_load_or_builtin_fallback() {
        let dict = SpellingDictionary::load_or_builtin("/nonexistent/words.txt");

        // Falls back to the built-in English vocabulary.
        assert!(dict.contains("computer"));
        assert!(dict.contains("the"));
        assert!(dict.word_count() > 100);
    }

    #[test]
    fn test_builtin_dictionaries() {
        let english = BuiltinDictionary::english();
        assert!(english.contains("algorithm"));
        assert!(english.contains("rust"));

        let minimal = BuiltinDictionary::minimal();
        assert!(minimal.contains("hello"));
        assert!(minimal.contains("receive"));
        assert!(minimal.word_count() > 10);
    }
}

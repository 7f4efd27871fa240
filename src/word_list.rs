//! `word_list`: load and normalize the target words to search for.
//!
//! Words can come from an in-memory string (the only option in WebAssembly
//! builds, where there is no filesystem) or from a file on native builds.
//!
//! The parsing logic:
//! - One word per line; surrounding whitespace is trimmed.
//! - Blank lines and lines starting with `#` are skipped.
//! - Words are normalized to uppercase and must be `A-Z` only.
//! - Duplicates are dropped, keeping the first occurrence. Order is otherwise
//!   preserved, because it is the order the solver scans in.

use std::collections::HashSet;

use crate::errors::InputError;
use crate::symbol::{encode_word, Symbol, UPPERCASE_ALPHABET};

/// A validated, uppercase target word together with its symbol codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetWord {
    text: String,
    codes: Vec<Symbol>,
}

impl TargetWord {
    /// Normalize `raw` to uppercase and validate it.
    ///
    /// # Errors
    ///
    /// - [`InputError::EmptyWord`] if `raw` has no characters.
    /// - [`InputError::InvalidWordChar`] for the first character outside `A-Z`
    ///   (after uppercasing).
    pub fn new(raw: &str) -> Result<Self, Box<InputError>> {
        if raw.is_empty() {
            return Err(Box::new(InputError::EmptyWord));
        }

        let text = raw.to_ascii_uppercase();
        if let Some(invalid_char) = text.chars().find(|c| !UPPERCASE_ALPHABET.contains(c)) {
            return Err(Box::new(InputError::InvalidWordChar { word: raw.to_string(), invalid_char }));
        }

        let codes = encode_word(&text);
        Ok(TargetWord { text, codes })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn codes(&self) -> &[Symbol] {
        &self.codes
    }

    /// Code of the first letter, which the scanner looks for.
    #[must_use]
    pub fn first_code(&self) -> Symbol {
        // safe: construction rejects empty words
        self.codes[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Ordered, deduplicated list of target words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Uppercase words in first-seen order.
    /// Example: `["CAT", "DOG", "EMU", ...]`
    pub words: Vec<TargetWord>,
}

impl WordList {
    /// Build a list from already-split words, validating each one.
    ///
    /// # Errors
    ///
    /// Returns the first validation error from [`TargetWord::new`].
    pub fn from_words<S: AsRef<str>>(raw_words: &[S]) -> Result<WordList, Box<InputError>> {
        let mut seen = HashSet::new();
        let mut words = Vec::with_capacity(raw_words.len());
        for raw in raw_words {
            let word = TargetWord::new(raw.as_ref())?;
            if seen.insert(word.text().to_string()) {
                words.push(word);
            }
        }
        Ok(WordList { words })
    }

    /// Parse a word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for the first line that is not a valid word.
    pub fn parse_from_str(contents: &str) -> Result<WordList, Box<InputError>> {
        let lines: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        Self::from_words(&lines)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`, or if a line
    /// is not a valid word (kind `InvalidInput`).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Self::parse_from_str(&data).map_err(|ie| (*ie).into())
    }

    /// Borrow the words as plain text, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(TargetWord::text).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_word_uppercases() {
        let w = TargetWord::new("adg").unwrap();
        assert_eq!(w.text(), "ADG");
        assert_eq!(w.codes(), &[1, 4, 7]);
        assert_eq!(w.first_code(), 1);
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn test_target_word_rejects_empty() {
        assert_eq!(*TargetWord::new("").unwrap_err(), InputError::EmptyWord);
    }

    #[test]
    fn test_target_word_rejects_non_letters() {
        let err = TargetWord::new("ice cream").unwrap_err();
        assert_eq!(*err, InputError::InvalidWordChar { word: "ice cream".to_string(), invalid_char: ' ' });
        assert_eq!(TargetWord::new("R2D2").unwrap_err().code(), "E005");
    }

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("cat\nDog\n  emu  \n").unwrap();
        assert_eq!(list.texts(), vec!["CAT", "DOG", "EMU"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = WordList::parse_from_str("# animals\ncat\n\n\n# more\ndog\n").unwrap();
        assert_eq!(list.texts(), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_deduplicates_keeping_first() {
        let list = WordList::parse_from_str("dog\ncat\nDOG\ncat\nemu").unwrap();
        assert_eq!(list.texts(), vec!["DOG", "CAT", "EMU"]);
    }

    #[test]
    fn test_parse_preserves_order() {
        let list = WordList::parse_from_str("zebra\napple\nmoose").unwrap();
        assert_eq!(list.texts(), vec!["ZEBRA", "APPLE", "MOOSE"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let list = WordList::parse_from_str("").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_line() {
        let err = WordList::parse_from_str("cat\nt-rex\ndog").unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[test]
    fn test_from_words() {
        let list = WordList::from_words(&["a", "B", "a"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.texts(), vec!["A", "B"]);
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let err = WordList::load_from_path("/nonexistent/words.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}

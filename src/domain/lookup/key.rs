//! Lookup key value object

use std::fmt;

use crate::domain::error::InvalidKeyError;

use super::Language;

/// The (word, language) pair identifying one cacheable pronunciation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    word: String,
    language: Language,
}

impl LookupKey {
    /// Create a lookup key.
    ///
    /// Rejects blank words, and words or languages that are exactly `.` or
    /// `..` (URL normalisation would drop them from the search path).
    pub fn new(
        word: impl Into<String>,
        language: impl Into<Language>,
    ) -> Result<Self, InvalidKeyError> {
        let word = word.into();
        let language = language.into();

        if word.trim().is_empty() {
            return Err(InvalidKeyError::EmptyWord { input: word });
        }
        if is_dot_segment(&word) {
            return Err(InvalidKeyError::DotWord { input: word });
        }
        if is_dot_segment(language.search_segment()) {
            return Err(InvalidKeyError::DotLanguage {
                input: language.label().to_string(),
            });
        }

        Ok(Self { word, language })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn language(&self) -> &Language {
        &self.language
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.word, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_word_and_language() {
        let key = LookupKey::new("hello", "en").unwrap();
        assert_eq!(key.word(), "hello");
        assert_eq!(key.language().label(), "en");
    }

    #[test]
    fn empty_word_is_rejected() {
        let err = LookupKey::new("", "").unwrap_err();
        assert_eq!(err, InvalidKeyError::EmptyWord { input: String::new() });
        assert!(LookupKey::new("   ", "en").is_err());
    }

    #[test]
    fn dot_segment_word_is_rejected() {
        for word in [".", ".."] {
            let err = LookupKey::new(word, "en").unwrap_err();
            assert_eq!(err, InvalidKeyError::DotWord { input: word.to_string() });
            assert!(err.to_string().contains("Invalid word"));
        }
    }

    #[test]
    fn dot_segment_language_is_rejected() {
        let err = LookupKey::new("hello", " .. ").unwrap_err();
        assert_eq!(err, InvalidKeyError::DotLanguage { input: "..".to_string() });
        assert!(LookupKey::new("hello", ".").is_err());
    }

    #[test]
    fn words_containing_dots_are_accepted() {
        for word in ["...", ".hidden", "a..b", "e.g.", " . "] {
            assert!(LookupKey::new(word, "en").is_ok(), "{:?}", word);
        }
    }

    #[test]
    fn default_and_empty_language_keys_are_equal() {
        assert_eq!(
            LookupKey::new("hello", "").unwrap(),
            LookupKey::new("hello", "default").unwrap()
        );
    }

    #[test]
    fn display() {
        let key = LookupKey::new("hello", "").unwrap();
        assert_eq!(key.to_string(), "'hello' (default)");
    }
}

//! Language code value object

use std::fmt;

/// Placeholder used wherever the default language must be spelled out
pub const DEFAULT_LANGUAGE: &str = "default";

/// Language code of a lookup.
///
/// An empty code and the literal `default` both mean "let the upstream
/// site pick", and compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Language(Option<String>);

impl Language {
    /// Create a language from a user supplied code
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref().trim();
        if code.is_empty() || code == DEFAULT_LANGUAGE {
            Self(None)
        } else {
            Self(Some(code.to_string()))
        }
    }

    /// Path segment sent to the search endpoint (empty for the default)
    pub fn search_segment(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    /// Name used in cache file names and messages
    pub fn label(&self) -> &str {
        self.0.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_is_default() {
        let lang = Language::new("");
        assert_eq!(lang, Language::default());
        assert_eq!(lang.label(), "default");
        assert_eq!(lang.search_segment(), "");
    }

    #[test]
    fn literal_default_equals_empty() {
        assert_eq!(Language::new("default"), Language::new(""));
        assert_eq!(Language::new("  "), Language::default());
    }

    #[test]
    fn explicit_code() {
        let lang = Language::from("en");
        assert_ne!(lang, Language::default());
        assert_eq!(lang.label(), "en");
        assert_eq!(lang.search_segment(), "en");
        assert_eq!(lang.to_string(), "en");
    }

    #[test]
    fn code_is_trimmed() {
        assert_eq!(Language::from(" ja ".to_string()), Language::from("ja"));
    }
}

//! Domain Value Objects
//!
//! Validated vocabulary fields. Input is trimmed before any check, and
//! lengths are counted in characters, not bytes.

use std::fmt;

use crate::error::{VocabError, VocabResult};

fn validate_text(field: &'static str, raw: &str, max_chars: usize) -> VocabResult<String> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(VocabError::invalid_field(field, "must not be empty"));
    }

    if value.chars().count() > max_chars {
        return Err(VocabError::invalid_field(
            field,
            format!("must be at most {} characters", max_chars),
        ));
    }

    Ok(value.to_string())
}

/// The word or phrase being learned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term(String);

impl Term {
    pub fn new(raw: &str, max_chars: usize) -> VocabResult<Self> {
        validate_text("term", raw, max_chars).map(Self)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Definition of the term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning(String);

impl Meaning {
    pub fn new(raw: &str, max_chars: usize) -> VocabResult<Self> {
        validate_text("meaning", raw, max_chars).map(Self)
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Example sentence using the term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example(String);

impl Example {
    /// Optional field: `None` and blank input both mean "no example".
    pub fn parse(raw: Option<&str>, max_chars: usize) -> VocabResult<Option<Self>> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => validate_text("example", value, max_chars).map(|v| Some(Self(v))),
        }
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_is_trimmed() {
        let term = Term::new("  ubiquitous \n", 100).unwrap();
        assert_eq!(term.as_str(), "ubiquitous");
    }

    #[test]
    fn test_term_rejects_blank() {
        assert!(matches!(
            Term::new("   ", 100),
            Err(VocabError::InvalidField { field: "term", .. })
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        // 5 chars, 15 bytes
        assert!(Meaning::new("あいうえお", 5).is_ok());
        assert!(Meaning::new("あいうえおか", 5).is_err());
    }

    #[test]
    fn test_example_optional() {
        assert_eq!(Example::parse(None, 10).unwrap(), None);
        assert_eq!(Example::parse(Some("  "), 10).unwrap(), None);
        assert_eq!(
            Example::parse(Some(" It is ubiquitous. "), 100)
                .unwrap()
                .map(|e| e.to_string()),
            Some("It is ubiquitous.".to_string())
        );
        assert!(Example::parse(Some("far too long"), 3).is_err());
    }
}

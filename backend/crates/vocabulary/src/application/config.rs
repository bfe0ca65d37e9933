//! Application Configuration

/// Field limits for vocabulary content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyConfig {
    /// Max characters in `term`
    pub term_max_chars: usize,
    /// Max characters in `meaning`
    pub meaning_max_chars: usize,
    /// Max characters in `example`
    pub example_max_chars: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            term_max_chars: 100,
            meaning_max_chars: 1000,
            example_max_chars: 1000,
        }
    }
}

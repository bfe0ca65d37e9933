//! Use case inputs and their validation

use kernel::id::VocabularyId;

use crate::application::config::VocabularyConfig;
use crate::domain::entities::VocabularyContent;
use crate::domain::value_objects::{Example, Meaning, Term};
use crate::error::{VocabError, VocabResult};

/// Raw vocabulary fields as received by create and update
#[derive(Debug, Clone)]
pub struct VocabularyInput {
    pub term: String,
    pub meaning: String,
    pub example: Option<String>,
}

impl VocabularyInput {
    pub fn validate(&self, config: &VocabularyConfig) -> VocabResult<VocabularyContent> {
        Ok(VocabularyContent {
            term: Term::new(&self.term, config.term_max_chars)?,
            meaning: Meaning::new(&self.meaning, config.meaning_max_chars)?,
            example: Example::parse(self.example.as_deref(), config.example_max_chars)?,
        })
    }
}

/// Parse the `{id}` path segment
pub fn parse_vocabulary_id(raw: &str) -> VocabResult<VocabularyId> {
    raw.parse()
        .map_err(|_| VocabError::InvalidId(raw.to_string()))
}

//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::VocabularyId;

use crate::domain::value_objects::{Example, Meaning, Term};

/// The user-editable part of a vocabulary, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyContent {
    pub term: Term,
    pub meaning: Meaning,
    pub example: Option<Example>,
}

/// Vocabulary entity
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Server-generated, never changes after creation
    pub id: VocabularyId,
    pub term: Term,
    pub meaning: Meaning,
    pub example: Option<Example>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vocabulary {
    /// Create a new vocabulary with a fresh id
    pub fn new(content: VocabularyContent) -> Self {
        let now = Utc::now();
        Self {
            id: VocabularyId::new(),
            term: content.term,
            meaning: content.meaning,
            example: content.example,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields, keeping id and creation time
    pub fn apply(&mut self, content: VocabularyContent) {
        self.term = content.term;
        self.meaning = content.meaning;
        self.example = content.example;
        self.updated_at = Utc::now();
    }

    pub fn content(&self) -> VocabularyContent {
        VocabularyContent {
            term: self.term.clone(),
            meaning: self.meaning.clone(),
            example: self.example.clone(),
        }
    }
}

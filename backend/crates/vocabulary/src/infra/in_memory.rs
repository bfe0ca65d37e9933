//! In-Memory Repository Implementation
//!
//! Keeps vocabularies in insertion order behind an `RwLock`.
//! Used by tests and for running the router without a database.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use kernel::id::VocabularyId;

use crate::domain::entities::{Vocabulary, VocabularyContent};
use crate::domain::repository::VocabularyRepository;
use crate::error::{VocabError, VocabResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryVocabularyRepository {
    vocabularies: Arc<RwLock<Vec<Vocabulary>>>,
}

impl InMemoryVocabularyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> VocabResult<RwLockReadGuard<'_, Vec<Vocabulary>>> {
        self.vocabularies
            .read()
            .map_err(|_| VocabError::Internal("Failed to acquire read lock".to_string()))
    }

    fn write(&self) -> VocabResult<RwLockWriteGuard<'_, Vec<Vocabulary>>> {
        self.vocabularies
            .write()
            .map_err(|_| VocabError::Internal("Failed to acquire write lock".to_string()))
    }
}

impl VocabularyRepository for InMemoryVocabularyRepository {
    async fn create(&self, vocabulary: &Vocabulary) -> VocabResult<VocabularyId> {
        let mut vocabularies = self.write()?;
        if vocabularies.iter().any(|v| v.id == vocabulary.id) {
            return Err(VocabError::Internal(format!(
                "Duplicate vocabulary id {}",
                vocabulary.id
            )));
        }
        vocabularies.push(vocabulary.clone());
        Ok(vocabulary.id)
    }

    async fn find_all(&self) -> VocabResult<Vec<Vocabulary>> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &VocabularyId) -> VocabResult<Option<Vocabulary>> {
        Ok(self.read()?.iter().find(|v| v.id == *id).cloned())
    }

    async fn update(
        &self,
        id: &VocabularyId,
        content: &VocabularyContent,
    ) -> VocabResult<Option<Vocabulary>> {
        let mut vocabularies = self.write()?;
        Ok(vocabularies.iter_mut().find(|v| v.id == *id).map(|v| {
            v.apply(content.clone());
            v.clone()
        }))
    }

    async fn delete(&self, id: &VocabularyId) -> VocabResult<bool> {
        let mut vocabularies = self.write()?;
        let before = vocabularies.len();
        vocabularies.retain(|v| v.id != *id);
        Ok(vocabularies.len() < before)
    }
}

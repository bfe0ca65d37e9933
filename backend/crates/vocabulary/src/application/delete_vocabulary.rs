//! Delete Vocabulary Use Case

use std::sync::Arc;

use kernel::id::VocabularyId;

use crate::application::input::parse_vocabulary_id;
use crate::domain::repository::VocabularyRepository;
use crate::error::{VocabError, VocabResult};

pub struct DeleteVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the id of the removed vocabulary
    pub async fn execute(&self, raw_id: &str) -> VocabResult<VocabularyId> {
        let id = parse_vocabulary_id(raw_id)?;

        if !self.repo.delete(&id).await? {
            return Err(VocabError::NotFound(id));
        }

        tracing::info!(vocabulary_id = %id, "Vocabulary deleted");

        Ok(id)
    }
}

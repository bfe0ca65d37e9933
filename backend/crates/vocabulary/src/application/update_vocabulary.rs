//! Update Vocabulary Use Case
//!
//! Full replacement of the editable fields. The id and creation time are
//! kept; `updated_at` is refreshed by the repository.

use std::sync::Arc;

use crate::application::config::VocabularyConfig;
use crate::application::input::{VocabularyInput, parse_vocabulary_id};
use crate::domain::entities::Vocabulary;
use crate::domain::repository::VocabularyRepository;
use crate::error::{VocabError, VocabResult};

pub struct UpdateVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    repo: Arc<R>,
    config: Arc<VocabularyConfig>,
}

impl<R> UpdateVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<VocabularyConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, raw_id: &str, input: VocabularyInput) -> VocabResult<Vocabulary> {
        let id = parse_vocabulary_id(raw_id)?;
        let content = input.validate(&self.config)?;

        let vocabulary = self
            .repo
            .update(&id, &content)
            .await?
            .ok_or(VocabError::NotFound(id))?;

        tracing::info!(vocabulary_id = %id, "Vocabulary updated");

        Ok(vocabulary)
    }
}

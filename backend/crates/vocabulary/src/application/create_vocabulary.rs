//! Create Vocabulary Use Case

use std::sync::Arc;

use crate::application::config::VocabularyConfig;
use crate::application::input::VocabularyInput;
use crate::domain::entities::Vocabulary;
use crate::domain::repository::VocabularyRepository;
use crate::error::VocabResult;

pub struct CreateVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    repo: Arc<R>,
    config: Arc<VocabularyConfig>,
}

impl<R> CreateVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<VocabularyConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: VocabularyInput) -> VocabResult<Vocabulary> {
        let content = input.validate(&self.config)?;
        let mut vocabulary = Vocabulary::new(content);

        vocabulary.id = self.repo.create(&vocabulary).await?;

        tracing::info!(
            vocabulary_id = %vocabulary.id,
            term = %vocabulary.term,
            "Vocabulary created"
        );

        Ok(vocabulary)
    }
}

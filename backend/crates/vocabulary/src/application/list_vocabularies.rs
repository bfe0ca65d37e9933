//! List Vocabularies Use Case

use std::sync::Arc;

use crate::domain::entities::Vocabulary;
use crate::domain::repository::VocabularyRepository;
use crate::error::VocabResult;

pub struct ListVocabulariesUseCase<R>
where
    R: VocabularyRepository,
{
    repo: Arc<R>,
}

impl<R> ListVocabulariesUseCase<R>
where
    R: VocabularyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> VocabResult<Vec<Vocabulary>> {
        let vocabularies = self.repo.find_all().await?;
        tracing::debug!(count = vocabularies.len(), "Listed vocabularies");
        Ok(vocabularies)
    }
}

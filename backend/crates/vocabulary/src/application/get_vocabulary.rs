//! Get Vocabulary Use Case

use std::sync::Arc;

use crate::application::input::parse_vocabulary_id;
use crate::domain::entities::Vocabulary;
use crate::domain::repository::VocabularyRepository;
use crate::error::{VocabError, VocabResult};

pub struct GetVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    repo: Arc<R>,
}

impl<R> GetVocabularyUseCase<R>
where
    R: VocabularyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> VocabResult<Vocabulary> {
        let id = parse_vocabulary_id(raw_id)?;

        self.repo
            .find_by_id(&id)
            .await?
            .ok_or(VocabError::NotFound(id))
    }
}

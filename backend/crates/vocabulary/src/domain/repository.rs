//! Repository Traits
//!
//! Interface for vocabulary persistence. Implementations are in the infra layer.

use crate::domain::entities::{Vocabulary, VocabularyContent};
use crate::error::VocabResult;
use kernel::id::VocabularyId;

/// Vocabulary repository trait
///
/// Every method is a single row-level operation. A missing row is reported
/// as `None` / `false`; turning that into an error is the use case's job.
#[trait_variant::make(VocabularyRepository: Send)]
pub trait LocalVocabularyRepository {
    /// Insert a new vocabulary and return its id
    async fn create(&self, vocabulary: &Vocabulary) -> VocabResult<VocabularyId>;

    /// All vocabularies, oldest first
    async fn find_all(&self) -> VocabResult<Vec<Vocabulary>>;

    /// Find vocabulary by ID
    async fn find_by_id(&self, id: &VocabularyId) -> VocabResult<Option<Vocabulary>>;

    /// Replace the content of a vocabulary, returning the stored row
    async fn update(
        &self,
        id: &VocabularyId,
        content: &VocabularyContent,
    ) -> VocabResult<Option<Vocabulary>>;

    /// Delete a vocabulary. Returns whether a row was removed.
    async fn delete(&self, id: &VocabularyId) -> VocabResult<bool>;
}

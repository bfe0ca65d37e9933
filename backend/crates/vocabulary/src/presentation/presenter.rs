//! Presenters
//!
//! Turn use case results into response bodies, and errors into problem
//! responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::id::VocabularyId;

use crate::domain::entities::Vocabulary;
use crate::error::VocabError;
use crate::presentation::dto::{
    DeleteVocabularyResponse, VocabularyListResponse, VocabularyResponse,
};

pub fn present_vocabulary(vocabulary: Vocabulary) -> VocabularyResponse {
    VocabularyResponse {
        vocabulary_id: vocabulary.id.into_uuid(),
        term: vocabulary.term.as_str().to_string(),
        meaning: vocabulary.meaning.as_str().to_string(),
        example: vocabulary.example.map(|e| e.as_str().to_string()),
        created_at_ms: vocabulary.created_at.timestamp_millis(),
        updated_at_ms: vocabulary.updated_at.timestamp_millis(),
    }
}

/// 201 with the stored vocabulary
pub fn present_created(vocabulary: Vocabulary) -> (StatusCode, Json<VocabularyResponse>) {
    (StatusCode::CREATED, Json(present_vocabulary(vocabulary)))
}

pub fn present_list(vocabularies: Vec<Vocabulary>) -> Json<VocabularyListResponse> {
    let vocabularies: Vec<_> = vocabularies.into_iter().map(present_vocabulary).collect();
    Json(VocabularyListResponse {
        count: vocabularies.len(),
        vocabularies,
    })
}

pub fn present_deleted(id: VocabularyId) -> Json<DeleteVocabularyResponse> {
    Json(DeleteVocabularyResponse {
        vocabulary_id: id.into_uuid(),
        deleted: true,
    })
}

/// Log the error and render it as an RFC 7807 body
pub fn present_error(err: VocabError) -> Response {
    err.log();
    err.to_app_error().into_response()
}

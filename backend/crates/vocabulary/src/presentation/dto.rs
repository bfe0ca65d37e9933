//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of POST /vocabularies and PUT /vocabularies/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRequest {
    pub term: String,
    pub meaning: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// A single vocabulary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyResponse {
    pub vocabulary_id: Uuid,
    pub term: String,
    pub meaning: String,
    pub example: Option<String>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

/// Response for GET /vocabularies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyListResponse {
    pub vocabularies: Vec<VocabularyResponse>,
    pub count: usize,
}

/// Response for DELETE /vocabularies/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteVocabularyResponse {
    pub vocabulary_id: Uuid,
    pub deleted: bool,
}

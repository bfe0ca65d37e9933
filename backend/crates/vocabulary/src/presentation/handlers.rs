//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::{
    CreateVocabularyUseCase, DeleteVocabularyUseCase, GetVocabularyUseCase,
    ListVocabulariesUseCase, UpdateVocabularyUseCase, VocabularyConfig, VocabularyInput,
};
use crate::domain::repository::VocabularyRepository;
use crate::error::{VocabError, VocabResult};
use crate::presentation::dto::{
    DeleteVocabularyResponse, VocabularyListResponse, VocabularyRequest, VocabularyResponse,
};
use crate::presentation::presenter;

/// Shared state for vocabulary handlers
#[derive(Clone)]
pub struct VocabularyAppState<R>
where
    R: VocabularyRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<VocabularyConfig>,
}

/// Body rejections are reported as our own 400 instead of axum's plain text.
fn read_body(
    payload: Result<Json<VocabularyRequest>, JsonRejection>,
) -> VocabResult<VocabularyInput> {
    let Json(req) = payload.map_err(|e| VocabError::MalformedBody(e.body_text()))?;
    Ok(VocabularyInput {
        term: req.term,
        meaning: req.meaning,
        example: req.example,
    })
}

/// POST /vocabularies
pub async fn create_vocabulary<R>(
    State(state): State<VocabularyAppState<R>>,
    payload: Result<Json<VocabularyRequest>, JsonRejection>,
) -> VocabResult<impl IntoResponse>
where
    R: VocabularyRepository + Clone + Send + Sync + 'static,
{
    let input = read_body(payload)?;

    let use_case = CreateVocabularyUseCase::new(state.repo.clone(), state.config.clone());
    let vocabulary = use_case.execute(input).await?;

    Ok(presenter::present_created(vocabulary))
}

/// GET /vocabularies
pub async fn list_vocabularies<R>(
    State(state): State<VocabularyAppState<R>>,
) -> VocabResult<Json<VocabularyListResponse>>
where
    R: VocabularyRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListVocabulariesUseCase::new(state.repo.clone());
    let vocabularies = use_case.execute().await?;

    Ok(presenter::present_list(vocabularies))
}

/// GET /vocabularies/{id}
pub async fn get_vocabulary<R>(
    State(state): State<VocabularyAppState<R>>,
    Path(id): Path<String>,
) -> VocabResult<Json<VocabularyResponse>>
where
    R: VocabularyRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetVocabularyUseCase::new(state.repo.clone());
    let vocabulary = use_case.execute(&id).await?;

    Ok(Json(presenter::present_vocabulary(vocabulary)))
}

/// PUT /vocabularies/{id}
pub async fn update_vocabulary<R>(
    State(state): State<VocabularyAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<VocabularyRequest>, JsonRejection>,
) -> VocabResult<Json<VocabularyResponse>>
where
    R: VocabularyRepository + Clone + Send + Sync + 'static,
{
    let input = read_body(payload)?;

    let use_case = UpdateVocabularyUseCase::new(state.repo.clone(), state.config.clone());
    let vocabulary = use_case.execute(&id, input).await?;

    Ok(Json(presenter::present_vocabulary(vocabulary)))
}

/// DELETE /vocabularies/{id}
pub async fn delete_vocabulary<R>(
    State(state): State<VocabularyAppState<R>>,
    Path(id): Path<String>,
) -> VocabResult<Json<DeleteVocabularyResponse>>
where
    R: VocabularyRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteVocabularyUseCase::new(state.repo.clone());
    let deleted_id = use_case.execute(&id).await?;

    Ok(presenter::present_deleted(deleted_id))
}

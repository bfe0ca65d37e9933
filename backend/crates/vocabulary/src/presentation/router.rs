//! Vocabulary Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::VocabularyConfig;
use crate::domain::repository::VocabularyRepository;
use crate::infra::postgres::PgVocabularyRepository;
use crate::presentation::handlers::{self, VocabularyAppState};

/// Create the vocabulary router with PostgreSQL repository
pub fn vocabulary_router(repo: PgVocabularyRepository, config: VocabularyConfig) -> Router {
    vocabulary_router_generic(repo, config)
}

/// Create a vocabulary router for any repository implementation
pub fn vocabulary_router_generic<R>(repo: R, config: VocabularyConfig) -> Router
where
    R: VocabularyRepository + Clone + Send + Sync + 'static,
{
    let state = VocabularyAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/vocabularies",
            get(handlers::list_vocabularies::<R>).post(handlers::create_vocabulary::<R>),
        )
        .route(
            "/vocabularies/{id}",
            get(handlers::get_vocabulary::<R>)
                .put(handlers::update_vocabulary::<R>)
                .delete(handlers::delete_vocabulary::<R>),
        )
        .with_state(state)
}

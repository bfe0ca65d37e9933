//! Vocabulary Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Vocabulary entity, value objects, repository trait
//! - `application/` - One use case per CRUD operation
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, presenters, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::VocabularyConfig;
pub use error::{VocabError, VocabResult};
pub use infra::in_memory::InMemoryVocabularyRepository;
pub use infra::postgres::PgVocabularyRepository;
pub use presentation::router::{vocabulary_router, vocabulary_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

//! Presentation Layer
//!
//! HTTP handlers, DTOs, presenters and router.

pub mod dto;
pub mod handlers;
pub mod presenter;
pub mod router;

pub use handlers::VocabularyAppState;
pub use router::{vocabulary_router, vocabulary_router_generic};

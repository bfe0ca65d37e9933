//! Infrastructure Layer
//!
//! Repository implementations.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryVocabularyRepository;
pub use postgres::PgVocabularyRepository;

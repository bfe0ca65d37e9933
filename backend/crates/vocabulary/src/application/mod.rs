//! Application Layer - Use Cases
//!
//! One use case per CRUD operation. Each validates its input, makes one
//! repository call and hands the outcome back to the presentation layer.

pub mod config;
pub mod create_vocabulary;
pub mod delete_vocabulary;
pub mod get_vocabulary;
pub mod input;
pub mod list_vocabularies;
pub mod update_vocabulary;

// Re-exports
pub use config::VocabularyConfig;
pub use create_vocabulary::CreateVocabularyUseCase;
pub use delete_vocabulary::DeleteVocabularyUseCase;
pub use get_vocabulary::GetVocabularyUseCase;
pub use input::VocabularyInput;
pub use list_vocabularies::ListVocabulariesUseCase;
pub use update_vocabulary::UpdateVocabularyUseCase;

//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - The vocabulary entity and its validated content
//! - Value objects for each user-supplied field
//! - The repository trait (interface)

pub mod entities;
pub mod repository;
pub mod value_objects;

//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - [`error`] - HTTP-facing error type and its classification
//! - [`id`] - typed identifiers for entities
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

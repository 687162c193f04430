//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO storage or UI dependencies.

mod entity;
mod dream;
mod theme;
mod error;
mod field_errors;

pub use entity::{Entity, next_id};
pub use dream::Dream;
pub use theme::{find_theme, theme_exists};
pub use error::{DomainError, DomainResult, StorageError};
pub use field_errors::{combine, Field, FieldErrors, ValidationResult};

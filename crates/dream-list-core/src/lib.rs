//! Dream List Core
//!
//! Layered architecture:
//! - domain: Core entities, validation outcome types and errors
//! - sanitise / validation: Input filtering and business rules
//! - repository: Key-value storage backends and typed JSON slots
//! - service: Auth, dream and theme operations used by the UI

pub mod config;
pub mod domain;
pub mod messages;
pub mod repository;
pub mod sanitise;
pub mod service;
pub mod validation;

pub use config::{StorageMode, ValidationConfig};
pub use domain::{Dream, DomainError, DomainResult, Field, FieldErrors, ValidationResult};
pub use repository::{KeyValueStore, MemoryStore, StorageError, StorageService};
pub use sanitise::{sanitise, sanitise_with, SanitisationResult, SanitiseIssue};
pub use service::{AuthService, DreamService, ThemeService};

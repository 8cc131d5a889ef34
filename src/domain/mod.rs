//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the fixed-point decimal and error types live here. Dependencies flow inward.

pub mod decimal;
pub mod entities;
pub mod errors;

pub use decimal::Decimal;
pub use entities::{Project, ProjectDraft};
pub use errors::{DomainError, ValidationError};

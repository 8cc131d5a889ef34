//! Application use cases. Orchestrate domain logic via ports.

pub mod project_service;

pub use project_service::ProjectService;

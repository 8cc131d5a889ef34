//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Project, ProjectDraft};

/// Project store. The only write the application needs is "insert one project".
#[async_trait::async_trait]
pub trait ProjectRepo: Send + Sync {
    /// Insert the draft and return the stored project with its assigned id.
    ///
    /// The draft is consumed; on error nothing is stored.
    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, DomainError>;
}

//! Project service: the single "add a project" use case.
//!
//! Delegates to the ProjectRepo port; the store owns id assignment and constraints.

use crate::domain::{DomainError, Project, ProjectDraft};
use crate::ports::ProjectRepo;
use std::sync::Arc;
use tracing::info;

pub struct ProjectService {
    repo: Arc<dyn ProjectRepo>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepo>) -> Self {
        Self { repo }
    }

    /// Insert a fully assembled draft. Errors are returned as-is for the caller to report.
    pub async fn add_project(&self, draft: ProjectDraft) -> Result<Project, DomainError> {
        let project = self.repo.create_project(draft).await?;
        info!(project_id = project.id, "project created");
        Ok(project)
    }
}

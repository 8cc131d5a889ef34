//! In-memory ProjectRepo. Used for ephemeral sessions (`storage = "memory"`) and tests.
//!
//! Ids start at 1 and increase by one per stored project.

use crate::domain::{DomainError, Project, ProjectDraft};
use crate::ports::ProjectRepo;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    projects: Vec<Project>,
}

/// Projects held in a Vec behind a mutex. Lost when the process exits.
pub struct MemoryRepo {
    store: Mutex<Store>,
    /// When set, every create fails with this message.
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A repo whose creates always fail with `DomainError::Repo(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Snapshot of everything stored so far, in insertion order.
    pub async fn projects(&self) -> Vec<Project> {
        self.store.lock().await.projects.clone()
    }

    /// Number of `create_project` calls, successful or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProjectRepo for MemoryRepo {
    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(DomainError::Repo(message.clone()));
        }
        if draft.name.is_none() {
            return Err(DomainError::Repo("project name is required".into()));
        }

        let mut store = self.store.lock().await;
        store.last_id += 1;
        let project = Project::from_draft(store.last_id, draft);
        store.projects.push(project.clone());
        debug!(project_id = project.id, "stored project in memory");
        Ok(project)
    }
}

//! Implements ProjectRepo using a JSON file.
//!
//! The whole store is cached in memory and rewritten after every insert.

use crate::domain::{DomainError, Project, ProjectDraft};
use crate::ports::ProjectRepo;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// File name inside the data directory.
pub const JSON_FILE: &str = "projects.json";

/// On-disk shape: `{ "next_id": .., "projects": [..] }`.
#[derive(Debug, Serialize, Deserialize)]
struct StoreData {
    next_id: i64,
    projects: Vec<Project>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_id: 1,
            projects: Vec::new(),
        }
    }
}

/// JSON file-based project storage.
pub struct JsonRepo {
    path: PathBuf,
    cache: tokio::sync::RwLock<StoreData>,
}

impl JsonRepo {
    /// Store in `<base_dir>/projects.json`. Call [`JsonRepo::load`] before use.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            path: base_dir.as_ref().join(JSON_FILE),
            cache: tokio::sync::RwLock::new(StoreData::default()),
        }
    }

    /// Load the store from disk. A missing file is an empty store; a corrupt one is an error,
    /// so existing projects are never silently overwritten.
    pub async fn load(&self) -> Result<(), DomainError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s)
                .map_err(|e| DomainError::Repo(format!("parse {}: {}", self.path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(e) => return Err(DomainError::Repo(e.to_string())),
        };
        info!(
            path = %self.path.display(),
            count = data.projects.len(),
            "loaded JSON project store"
        );
        *self.cache.write().await = data;
        Ok(())
    }

    /// Write-replace: temp file, sync_all, then rename over the target.
    async fn save(&self, data: &StoreData) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Repo(format!("create data dir: {}", e)))?;
        }
        let json =
            serde_json::to_string_pretty(data).map_err(|e| DomainError::Repo(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Repo(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Repo(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Repo(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Repo(format!("atomic rename failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectRepo for JsonRepo {
    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, DomainError> {
        if draft.name.is_none() {
            return Err(DomainError::Repo("project name is required".into()));
        }

        let mut cache = self.cache.write().await;
        let project = Project::from_draft(cache.next_id, draft);
        cache.projects.push(project.clone());
        cache.next_id += 1;

        if let Err(e) = self.save(&cache).await {
            // Keep the cache in step with the file.
            cache.projects.pop();
            cache.next_id -= 1;
            return Err(e);
        }
        Ok(project)
    }
}

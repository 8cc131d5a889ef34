//! SQLite-backed project store via libsql. Implements ProjectRepo.
//!
//! One `project` table in `<data_dir>/projects.db`. Hours are stored as their two-decimal
//! text form so values round-trip exactly.

use crate::domain::{Decimal, DomainError, Project, ProjectDraft};
use crate::ports::ProjectRepo;
use libsql::{Database, params};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name inside the data directory.
pub const DB_FILE: &str = "projects.db";

const PROJECT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS project (
    project_id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_name TEXT NOT NULL,
    estimated_hours TEXT,
    actual_hours TEXT,
    difficulty INTEGER,
    notes TEXT
)"#;

/// SQLite repository. Safe to share via Arc; each call opens its own connection.
pub struct SqliteRepo {
    db: Database,
    db_path: PathBuf,
}

impl SqliteRepo {
    /// Connect to (or create) the database and ensure the schema exists.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(|e| DomainError::Repo(e.to_string()))?;
        let db_path = base.join(DB_FILE);
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let conn = db.connect().map_err(|e| DomainError::Repo(e.to_string()))?;

        // PRAGMA returns a row; query and drain (execute fails when rows are returned).
        let mut wal_rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| DomainError::Repo(format!("WAL pragma failed: {}", e)))?;
        while wal_rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
            .is_some()
        {}

        conn.execute(PROJECT_TABLE, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;

        info!(path = %db_path.display(), "SQLite project store connected");

        Ok(Self { db, db_path })
    }

    fn hours_to_text(hours: Option<Decimal>) -> Option<String> {
        hours.map(|h| h.to_string())
    }
}

#[async_trait::async_trait]
impl ProjectRepo for SqliteRepo {
    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, DomainError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let tx = conn
            .transaction()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        tx.execute(
            r#"
            INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                draft.name.clone(),
                Self::hours_to_text(draft.estimated_hours),
                Self::hours_to_text(draft.actual_hours),
                draft.difficulty,
                draft.notes.clone()
            ],
        )
        .await
        .map_err(|e| DomainError::Repo(e.to_string()))?;
        tx.commit()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;

        let project_id = conn.last_insert_rowid();
        info!(project_id, path = %self.db_path.display(), "inserted project row");
        Ok(Project::from_draft(project_id, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl SqliteRepo {
        fn path(&self) -> &Path {
            &self.db_path
        }

        async fn get_project(&self, id: i64) -> Result<Option<Project>, DomainError> {
            let conn = self
                .db
                .connect()
                .map_err(|e| DomainError::Repo(e.to_string()))?;
            let mut rows = conn
                .query(
                    r#"
                    SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
                    FROM project
                    WHERE project_id = ?1
                    "#,
                    params![id],
                )
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;

            let Some(row) = rows
                .next()
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?
            else {
                return Ok(None);
            };

            let id: i64 = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
            let name: Option<String> = row.get(1).map_err(|e| DomainError::Repo(e.to_string()))?;
            let estimated: Option<String> =
                row.get(2).map_err(|e| DomainError::Repo(e.to_string()))?;
            let actual: Option<String> = row.get(3).map_err(|e| DomainError::Repo(e.to_string()))?;
            let difficulty: Option<i32> = row.get(4).map_err(|e| DomainError::Repo(e.to_string()))?;
            let notes: Option<String> = row.get(5).map_err(|e| DomainError::Repo(e.to_string()))?;

            Ok(Some(Project {
                id,
                name,
                estimated_hours: Self::text_to_hours(estimated)?,
                actual_hours: Self::text_to_hours(actual)?,
                difficulty,
                notes,
            }))
        }

        fn text_to_hours(text: Option<String>) -> Result<Option<Decimal>, DomainError> {
            text.map(|s| s.parse::<Decimal>())
                .transpose()
                .map_err(|e| DomainError::Repo(format!("corrupt hours column: {}", e)))
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        assert!(repo.path().ends_with(DB_FILE));

        let draft = ProjectDraft {
            name: Some("Widget".into()),
            estimated_hours: Some("10".parse().unwrap()),
            actual_hours: Some("8.126".parse().unwrap()),
            difficulty: Some(3),
            notes: None,
        };
        let created = repo.create_project(draft).await.unwrap();
        assert_eq!(created.id, 1);

        let stored = repo.get_project(1).await.unwrap().unwrap();
        assert_eq!(stored, created);
        assert_eq!(stored.actual_hours.unwrap().to_string(), "8.13");
        assert!(repo.get_project(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_survive_reconnect() {
        let dir = tempfile::tempdir().unwrap();
        let named = |n: &str| ProjectDraft {
            name: Some(n.into()),
            ..Default::default()
        };
        {
            let repo = SqliteRepo::connect(dir.path()).await.unwrap();
            repo.create_project(named("a")).await.unwrap();
        }
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        let b = repo.create_project(named("b")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_missing_name_violates_not_null() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        let err = repo
            .create_project(ProjectDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Repo(_)));
        assert!(repo.get_project(1).await.unwrap().is_none());
    }
}

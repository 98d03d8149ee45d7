//! In-Memory Project Repository
//!
//! Projects live for the lifetime of the process. Ids are monotonic,
//! timestamps are assigned on creation.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tauri::async_runtime::RwLock;

use super::ProjectRepository;
use crate::domain::{NewProject, Project};

pub struct MemoryProjectRepository {
    projects: RwLock<Vec<Project>>,
}

impl MemoryProjectRepository {
    pub const fn new() -> Self {
        MemoryProjectRepository {
            projects: RwLock::const_new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn create(&self, data: NewProject<'_>) -> Result<Project> {
        let mut projects = self.projects.write().await;

        let id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let project = Project {
            id,
            name: data.name.to_string(),
            created_at: now,
            updated_at: now,
            is_active: true,
            archived_at: None,
        };

        projects.push(project.clone());
        Ok(project)
    }

    async fn get(&self, id: u64) -> Result<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.clone())
    }
}

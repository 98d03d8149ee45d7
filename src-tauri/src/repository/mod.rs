//! Repository Layer
//!
//! Data access behind async traits so commands stay storage-agnostic.

mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{NewProject, Project};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: NewProject<'_>) -> Result<Project>;
    async fn get(&self, id: u64) -> Result<Option<Project>>;
    async fn list(&self) -> Result<Vec<Project>>;
}

pub use memory::MemoryProjectRepository;

//! Project Commands

use tauri::State;
use validator::Validate;

use crate::domain::{NewProject, Project};
use crate::error::Result;
use crate::AppState;

/// List all projects
#[tauri::command]
pub async fn get_all_projects(state: State<'_, AppState>) -> Result<Vec<Project>> {
    log::info!("listing projects");
    state.projects.list().await.map_err(Into::into)
}

/// Validate and create a new project
#[tauri::command]
pub async fn create_project(state: State<'_, AppState>, name: String) -> Result<Project> {
    let data = NewProject { name: &name };
    data.validate()?;

    log::info!("creating project {:?}", name);
    state.projects.create(data).await.map_err(Into::into)
}

//! Project Board Backend
//!
//! Layered architecture:
//! - domain: Core entities and validation rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;

mod commands;
mod domain;
mod error;
mod repository;

use repository::{MemoryProjectRepository, ProjectRepository};

/// Application state shared across commands
pub struct AppState {
    pub projects: Arc<dyn ProjectRepository>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            app.manage(AppState {
                projects: Arc::new(MemoryProjectRepository::new()),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_all_projects,
            commands::create_project,
            commands::get_window_title,
            commands::set_window_title,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

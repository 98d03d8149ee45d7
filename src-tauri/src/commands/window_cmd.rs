//! Window Commands
//!
//! Window-title access for the frontend title synchronizer.

use anyhow::Context;

use crate::error::Result;

/// Current native window title
#[tauri::command]
pub fn get_window_title(window: tauri::Window) -> Result<String> {
    window
        .title()
        .context("failed to read window title")
        .map_err(Into::into)
}

/// Replace the native window title
#[tauri::command]
pub fn set_window_title(window: tauri::Window, title: String) -> Result<()> {
    log::info!("setting window title to {:?}", title);
    window
        .set_title(&title)
        .context("failed to set window title")
        .map_err(Into::into)
}

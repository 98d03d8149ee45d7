//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the backend services.

mod project_cmd;
mod window_cmd;

pub use project_cmd::*;
pub use window_cmd::*;

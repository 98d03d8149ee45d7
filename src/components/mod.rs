//! UI Components

mod modal;
mod project_create_modal;
mod window_title;

pub use modal::Modal;
pub use project_create_modal::ProjectCreateModal;
pub use window_title::WindowTitle;

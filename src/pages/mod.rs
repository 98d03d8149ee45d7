//! Pages

mod project;
mod projects;

pub use project::ProjectPage;
pub use projects::ProjectsPage;

//! Project Board Frontend App
//!
//! Top-level router mapping paths to pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{ProjectPage, ProjectsPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("/") view=ProjectsPage />
                <Route path=path!("/:projectId") view=ProjectPage />
            </Routes>
        </Router>
    }
}

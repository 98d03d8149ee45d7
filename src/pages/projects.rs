//! Projects Page
//!
//! Lists all projects and hosts the creation modal. The list fetch is
//! guarded so only one request is outstanding at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::commands;
use crate::components::{ProjectCreateModal, WindowTitle};
use crate::guard::RequestGuard;
use crate::models::Project;
use crate::relative_time::distance_to_now;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (show_create_modal, set_show_create_modal) = signal(false);
    let guard = RequestGuard::new();

    let fetch_projects = {
        let guard = guard.clone();
        move || {
            let Some(permit) = guard.try_acquire() else {
                return;
            };
            spawn_local(async move {
                match commands::get_all_projects().await {
                    Ok(loaded) => set_projects.set(loaded),
                    Err(err) => {
                        // Log-only failure; the list simply stays as it was.
                        web_sys::console::error_1(
                            &format!("get_all_projects failed: {}", err).into(),
                        );
                    }
                }
                drop(permit);
            });
        }
    };

    // Initial load
    {
        let fetch_projects = fetch_projects.clone();
        Effect::new(move |_| {
            fetch_projects();
        });
    }

    let handle_create = {
        let fetch_projects = fetch_projects.clone();
        move |_project: Project| {
            set_show_create_modal.set(false);
            fetch_projects();
        }
    };

    view! {
        <div class="page">
            <WindowTitle title=Signal::derive(|| "Projects".to_string()) />
            <h1 class="page__header">"Projects"</h1>
            <button
                class="button button_primary"
                on:click=move |_| set_show_create_modal.set(true)
            >
                "+New"
            </button>

            <Show when=move || show_create_modal.get()>
                <ProjectCreateModal
                    on_close=move |()| set_show_create_modal.set(false)
                    on_success=handle_create.clone()
                />
            </Show>

            <ul class="projects">
                <For
                    each=move || projects.get()
                    key=|project| project.id
                    children=move |project: Project| {
                        view! {
                            <li class="project" tabindex="0">
                                <A href=format!("/{}", project.id)>
                                    <span class="project__name">{project.name.clone()}</span>
                                    " "
                                    <span class="project__id">{format!("#{}", project.id)}</span>
                                    " "
                                    <span class="project__last-update">
                                        {format!("-- {}", distance_to_now(project.updated_at))}
                                    </span>
                                </A>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

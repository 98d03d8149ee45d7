//! Project Page
//!
//! Groups and their todos for a single project. Groups collapse and expand
//! locally; todos render through the grouping utility.

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::WindowTitle;
use crate::grouping::todos_by_group;
use crate::models::{Group, Todo};

// TODO: replace with group/todo gateway commands once the backend exposes them
fn sample_groups() -> Vec<Group> {
    let group = |id, name: &str, position| Group {
        id,
        name: name.to_string(),
        position,
        is_opened: true,
    };
    vec![
        group(1, "Backlog", 1),
        group(2, "In progress", 2),
        group(3, "Done", 3),
    ]
}

fn sample_todos() -> Vec<Todo> {
    let now = Utc::now();
    let todo = |text: &str, position, is_done, group_id| Todo {
        text: text.to_string(),
        position,
        created_at: now,
        updated_at: now,
        is_done,
        group_id,
    };
    vec![
        todo("Sketch the project list", 1, false, 1),
        todo("Wire up the creation modal", 2, false, 1),
        todo("Decide on group ordering", 1, false, 2),
        todo("Pick a name", 1, true, 3),
        todo("Set up the repository", 2, true, 3),
    ]
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || params.read().get("projectId").unwrap_or_default();

    let (groups, set_groups) = signal(sample_groups());
    let (todos, _set_todos) = signal(sample_todos());

    let grouped = Memo::new(move |_| todos_by_group(&groups.get(), &todos.get()));

    let toggle_group = move |id: u32| {
        set_groups.update(|groups| {
            if let Some(group) = groups.iter_mut().find(|g| g.id == id) {
                group.is_opened = !group.is_opened;
            }
        });
    };

    let ordered_groups = move || {
        let mut ordered = groups.get();
        ordered.sort_by_key(|group| group.position);
        ordered
    };

    let title = Signal::derive(move || format!("Project #{}", project_id()));

    view! {
        <div class="page">
            <WindowTitle title=title />
            <h1 class="page__header">{move || format!("Project #{}", project_id())}</h1>
            <A href="/">"Back to projects"</A>

            <ul class="groups">
                <For
                    each=ordered_groups
                    key=|group| group.id
                    children=move |group: Group| {
                        let group_id = group.id;
                        let is_opened = move || {
                            groups
                                .get()
                                .iter()
                                .find(|g| g.id == group_id)
                                .map(|g| g.is_opened)
                                .unwrap_or(false)
                        };
                        let group_todos = move || {
                            grouped.get().get(&group_id).cloned().unwrap_or_default()
                        };
                        view! {
                            <li class="group">
                                <button
                                    class="group__header"
                                    on:click=move |_| toggle_group(group_id)
                                >
                                    <span class="group__marker">
                                        {move || if is_opened() { "▾" } else { "▸" }}
                                    </span>
                                    <span class="group__name">{group.name.clone()}</span>
                                </button>
                                <Show when=is_opened>
                                    <ul class="todos">
                                        <For
                                            each=group_todos
                                            key=|todo| (todo.position, todo.text.clone())
                                            children=|todo: Todo| {
                                                view! {
                                                    <li class="todo" class:todo_done=todo.is_done>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=todo.is_done
                                                            disabled=true
                                                        />
                                                        <span class="todo__text">{todo.text.clone()}</span>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

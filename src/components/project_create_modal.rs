//! Project Create Modal
//!
//! Form for creating a new project. Validation failures render under the
//! offending field; anything else renders as a generic message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CommandError};
use crate::components::Modal;
use crate::models::Project;

#[component]
pub fn ProjectCreateModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_success: Callback<Project>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<CommandError>>(None);

    let handle_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Guard against double submission while a call is in flight.
        if saving.get_untracked() {
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let value = name.get_untracked();
        spawn_local(async move {
            match commands::create_project(&value).await {
                Ok(project) => {
                    on_success.run(project);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("create_project failed: {}", err).into());
                    set_error.set(Some(err));
                }
            }
            set_saving.set(false);
        });
    };

    let name_errors = move || {
        error
            .get()
            .map(|err| err.field_messages("name"))
            .unwrap_or_default()
    };
    let generic_error = move || {
        error.get().and_then(|err| {
            if err.is_validation() {
                None
            } else {
                Some(err.to_string())
            }
        })
    };

    view! {
        <Modal header="New project" on_close=on_close>
            <form on:submit=handle_save>
                <div class="field field_row">
                    <label class="field__label" for="new_project_name">
                        "Name:"
                    </label>
                    <input
                        class="field__input"
                        id="new_project_name"
                        type="text"
                        name="name"
                        autocomplete="off"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                </div>
                <div class="field__error">
                    {move || {
                        name_errors()
                            .into_iter()
                            .map(|message| view! { <p>{message}</p> })
                            .collect_view()
                    }}
                </div>
                <div class="field__error">{generic_error}</div>

                <button class="button button_primary" type="submit" disabled=move || saving.get()>
                    "Save"
                </button>
                <button
                    class="button"
                    type="button"
                    on:click=move |_| on_close.run(())
                    disabled=move || saving.get()
                >
                    "Cancel"
                </button>
            </form>
        </Modal>
    }
}

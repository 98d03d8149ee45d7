//! Window Title Synchronizer
//!
//! Mirrors a view-provided title into the native window title and restores
//! the original on teardown. Capture, updates, and restore all flow through
//! one FIFO queue, so they execute in submission order even though each is
//! an async call.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::commands;
use crate::queue::TaskQueue;

enum TitleTask {
    CaptureOriginal,
    Set(String),
    Restore,
}

#[component]
pub fn WindowTitle(#[prop(into)] title: Signal<String>) -> impl IntoView {
    // Original title lives inside the worker; the queue is the only way in.
    let original: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let queue = TaskQueue::spawn(move |task: TitleTask| {
        let original = Rc::clone(&original);
        async move {
            match task {
                TitleTask::CaptureOriginal => match commands::get_window_title().await {
                    Ok(current) => {
                        let mut slot = original.borrow_mut();
                        if slot.is_none() {
                            *slot = Some(current);
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to read original window title: {}", err).into(),
                        );
                    }
                },
                TitleTask::Set(title) => {
                    if let Err(err) = commands::set_window_title(&title).await {
                        web_sys::console::error_1(
                            &format!("failed to set window title: {}", err).into(),
                        );
                    }
                }
                TitleTask::Restore => {
                    let saved = original.borrow_mut().take();
                    if let Some(title) = saved {
                        if let Err(err) = commands::set_window_title(&title).await {
                            web_sys::console::error_1(
                                &format!("failed to restore window title: {}", err).into(),
                            );
                        }
                    }
                }
            }
        }
    });

    // Capture the original before any update can overwrite it.
    queue.enqueue(TitleTask::CaptureOriginal);

    // Push every title change, in order.
    {
        let queue = queue.clone();
        Effect::new(move |_| {
            queue.enqueue(TitleTask::Set(title.get()));
        });
    }

    // Teardown: restore runs after all still-pending updates.
    on_cleanup(move || {
        queue.enqueue(TitleTask::Restore);
    });
}

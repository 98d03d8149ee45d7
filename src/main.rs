//! Project Board Frontend Entry Point

mod app;
mod commands;
mod components;
mod grouping;
mod guard;
mod models;
mod pages;
mod queue;
mod relative_time;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

//! Project Commands
//!
//! Frontend bindings for project-related backend commands.

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{invoke, CommandError};
use crate::models::Project;

#[derive(Serialize)]
struct CreateProjectArgs<'a> {
    name: &'a str,
}

pub async fn get_all_projects() -> Result<Vec<Project>, CommandError> {
    let result = invoke("get_all_projects", JsValue::NULL)
        .await
        .map_err(CommandError::from_rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(CommandError::from_decode)
}

pub async fn create_project(name: &str) -> Result<Project, CommandError> {
    let args =
        serde_wasm_bindgen::to_value(&CreateProjectArgs { name }).map_err(CommandError::from_decode)?;
    let result = invoke("create_project", args)
        .await
        .map_err(CommandError::from_rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(CommandError::from_decode)
}

//! Window Commands
//!
//! Frontend bindings for the window-title backend commands.

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{invoke, CommandError};

#[derive(Serialize)]
struct SetTitleArgs<'a> {
    title: &'a str,
}

pub async fn get_window_title() -> Result<String, CommandError> {
    let result = invoke("get_window_title", JsValue::NULL)
        .await
        .map_err(CommandError::from_rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(CommandError::from_decode)
}

pub async fn set_window_title(title: &str) -> Result<(), CommandError> {
    let args =
        serde_wasm_bindgen::to_value(&SetTitleArgs { title }).map_err(CommandError::from_decode)?;
    invoke("set_window_title", args)
        .await
        .map_err(CommandError::from_rejection)?;
    Ok(())
}

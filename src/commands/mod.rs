//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain. The `catch`
//! binding makes rejected invocations surface as `Err`, which the error
//! module decodes into a typed result at the IPC boundary.

mod error;
mod project;
mod window;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use error::*;
pub use project::*;
pub use window::*;

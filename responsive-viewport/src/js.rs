use wasm_bindgen::{JsCast, JsValue};

/// Renders a `JsValue` error for log output: plain strings pass through,
/// objects are JSON-stringified, anything else falls back to `Debug`.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        s
    } else if let Some(obj) = value.dyn_ref::<js_sys::Object>() {
        js_sys::JSON::stringify(obj)
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "[object]".to_owned())
    } else {
        format!("{value:?}")
    }
}

use crate::error::{AppError, AppResult};
use std::fmt::Debug;
use wasm_bindgen::{JsCast, JsValue};

/// Turns any Rust error into a `JsValue` so it can reject a promise.
pub trait ResultExt<T> {
    fn ok_or_js_err(self) -> Result<T, JsValue>;
    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue>;
}

impl<T, E: Debug> ResultExt<T> for Result<T, E> {
    fn ok_or_js_err(self) -> Result<T, JsValue> {
        self.map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue> {
        self.map_err(|e| JsValue::from_str(&format!("{}: {:?}", msg, e)))
    }
}

/// Maps a failed JS call onto `AppError::Network`.
pub trait JsResultExt<T> {
    fn or_network_err(self, context: &str) -> AppResult<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn or_network_err(self, context: &str) -> AppResult<T> {
        self.map_err(|err| AppError::network(format!("{}: {}", context, js_error_message(&err))))
    }
}

pub fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

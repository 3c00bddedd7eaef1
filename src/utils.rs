use cfg_if::cfg_if;

cfg_if! {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    if #[cfg(feature = "console_error_panic_hook")] {
        pub use console_error_panic_hook::set_once as set_panic_hook;
    } else {
        #[inline]
        pub fn set_panic_hook() {}
    }
}

/// `format!`-style logging to the worker console.
#[macro_export]
macro_rules! console_logf {
    ($($t:tt)*) => ($crate::utils::log(&format!($($t)*)))
}

#[macro_export]
macro_rules! console_errorf {
    ($($t:tt)*) => ($crate::utils::error(&format!($($t)*)))
}

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub fn log(msg: &str) {
            web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
        }

        pub fn error(msg: &str) {
            web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));
        }
    } else {
        // Native builds only run the unit tests.
        pub fn log(msg: &str) {
            eprintln!("{}", msg);
        }

        pub fn error(msg: &str) {
            eprintln!("error: {}", msg);
        }
    }
}

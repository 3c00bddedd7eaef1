//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

use js_sys::Promise;
use paw_shuffle::dog_api::{race_with_timeout, worker_scope};
use paw_shuffle::error::AppError;
use paw_shuffle::extensions::{js_error_message, JsResultExt, ResultExt};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn app_errors_reject_as_strings() {
    let err: Result<(), AppError> = Err(AppError::Lookup {
        identifier: "appenzeller".to_owned(),
    });
    let js = err.ok_or_js_err_with_msg("lookup failed").unwrap_err();
    let msg = js.as_string().unwrap();
    assert!(msg.starts_with("lookup failed: "));
    assert!(msg.contains("appenzeller"));
}

#[wasm_bindgen_test]
fn js_errors_become_network_errors() {
    let failed: Result<(), JsValue> = Err(js_sys::Error::new("connection reset").into());
    match failed.or_network_err("fetch failed") {
        Err(AppError::Network { message }) => {
            assert_eq!(message, "fetch failed: connection reset")
        }
        other => panic!("expected network error, got {:?}", other),
    }
    assert_eq!(js_error_message(&JsValue::from_str("plain")), "plain");
}

#[wasm_bindgen_test]
fn a_browser_window_is_not_a_worker_scope() {
    assert!(matches!(worker_scope(), Err(AppError::Network { .. })));
}

#[wasm_bindgen_test]
async fn a_request_that_never_settles_times_out() {
    let window = web_sys::window().unwrap();
    let never = Promise::new(&mut |_resolve, _reject| {});
    match race_with_timeout(&window, never, "https://dog.ceo/slow", 10).await {
        Err(AppError::Network { message }) => {
            assert_eq!(message, "request to https://dog.ceo/slow timed out after 10 ms")
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn a_failed_request_is_not_reported_as_a_timeout() {
    let window = web_sys::window().unwrap();
    let refused = Promise::reject(&js_sys::Error::new("connection refused").into());
    match race_with_timeout(&window, refused, "https://dog.ceo/down", 5_000).await {
        Err(AppError::Network { message }) => {
            assert!(message.contains("connection refused"), "{}", message);
            assert!(!message.contains("timed out"), "{}", message);
        }
        other => panic!("expected network error, got {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn a_settled_request_wins_the_race() {
    let window = web_sys::window().unwrap();
    let ready = Promise::resolve(&JsValue::from_str("woof"));
    let value = race_with_timeout(&window, ready, "https://dog.ceo/fast", 5_000)
        .await
        .unwrap();
    assert_eq!(value.as_string().as_deref(), Some("woof"));
}

//! Client for the Dog CEO random image API.

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::extensions::{js_error_message, JsResultExt};
use crate::models::{BreedId, ImageResult};
use js_sys::{Array, Function, Promise};
use serde::Deserialize;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, ServiceWorkerGlobalScope, Window, WorkerGlobalScope};

static IMAGES_PREFIX: &str = "/images/";

#[derive(Deserialize, Debug)]
struct RandomImageResponse {
    message: String,
    status: String,
}

/// One GET to the random image endpoint, raced against the configured timeout.
pub async fn fetch_random_image(settings: &Settings) -> AppResult<ImageResult> {
    let scope = worker_scope()?;
    let response = fetch_with_timeout(
        &scope,
        &settings.random_image_url,
        settings.request_timeout_ms,
    )
    .await?;
    if !response.ok() {
        return Err(AppError::NotFound {
            status: response.status(),
            url: settings.random_image_url.clone(),
        });
    }

    let body = JsFuture::from(response.text().or_network_err("couldn't read response")?)
        .await
        .or_network_err("couldn't read response")?;
    let body = body
        .as_string()
        .ok_or_else(|| AppError::network("response body was not text"))?;
    parse_random_image_response(&body, settings)
}

pub fn worker_scope() -> AppResult<ServiceWorkerGlobalScope> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| AppError::network("not running in a service worker"))
}

async fn fetch_with_timeout(
    scope: &ServiceWorkerGlobalScope,
    url: &str,
    timeout_ms: i32,
) -> AppResult<Response> {
    let worker: &WorkerGlobalScope = scope;
    race_with_timeout(worker, scope.fetch_with_str(url), url, timeout_ms)
        .await?
        .dyn_into::<Response>()
        .map_err(|_| AppError::network("fetch did not resolve to a Response"))
}

/// The `setTimeout` / `clearTimeout` pair, shared by worker and window scopes.
pub trait TimerScope {
    fn set_timeout(&self, callback: &Function, timeout_ms: i32) -> Result<i32, JsValue>;
    fn clear_timeout(&self, handle: i32);
}

impl TimerScope for WorkerGlobalScope {
    fn set_timeout(&self, callback: &Function, timeout_ms: i32) -> Result<i32, JsValue> {
        self.set_timeout_with_callback_and_timeout_and_arguments_0(callback, timeout_ms)
    }

    fn clear_timeout(&self, handle: i32) {
        self.clear_timeout_with_handle(handle)
    }
}

impl TimerScope for Window {
    fn set_timeout(&self, callback: &Function, timeout_ms: i32) -> Result<i32, JsValue> {
        self.set_timeout_with_callback_and_timeout_and_arguments_0(callback, timeout_ms)
    }

    fn clear_timeout(&self, handle: i32) {
        self.clear_timeout_with_handle(handle)
    }
}

/// Settles with `pending`, or fails once `timeout_ms` passes first. `url` only
/// labels the error.
pub async fn race_with_timeout<T: TimerScope>(
    timers: &T,
    pending: Promise,
    url: &str,
    timeout_ms: i32,
) -> AppResult<JsValue> {
    // The timer rejects with `undefined`, which is how a timeout is told apart
    // from a failed request.
    let mut timer_handle = None;
    let timer = Promise::new(&mut |_resolve, reject| {
        timer_handle = timers.set_timeout(&reject, timeout_ms).ok();
    });
    let race = Promise::race(&Array::of2(&pending, &timer));
    let outcome = JsFuture::from(race).await;
    if let Some(handle) = timer_handle {
        timers.clear_timeout(handle);
    }

    match outcome {
        Ok(value) => Ok(value),
        Err(err) if err.is_undefined() => Err(AppError::network(format!(
            "request to {} timed out after {} ms",
            url, timeout_ms
        ))),
        Err(err) => Err(AppError::network(format!(
            "request to {} failed: {}",
            url,
            js_error_message(&err)
        ))),
    }
}

/// Decodes `{"message": "<image url>", "status": "success"}`.
pub fn parse_random_image_response(body: &str, settings: &Settings) -> AppResult<ImageResult> {
    let payload: RandomImageResponse = serde_json::from_str(body)
        .map_err(|e| AppError::network(format!("unexpected payload: {}", e)))?;
    if payload.status != "success" {
        return Err(AppError::network(format!(
            "unexpected payload status '{}'",
            payload.status
        )));
    }
    let breed_id = extract_breed_identifier(&payload.message, &settings.image_host)
        .ok_or_else(|| AppError::network(format!("unexpected image url '{}'", payload.message)))?;
    Ok(ImageResult {
        url: payload.message,
        breed_id,
    })
}

/// The folder after `/breeds/` in an image URL on `image_host`, e.g.
/// `retriever-golden` in `https://images.dog.ceo/breeds/retriever-golden/n02099601_1234.jpg`.
pub fn extract_breed_identifier(image_url: &str, image_host: &str) -> Option<BreedId> {
    let url = Url::parse(image_url).ok()?;
    if url.scheme() != "https" || url.host_str()? != image_host {
        return None;
    }
    let mut segments = url.path_segments()?;
    if segments.next()? != "breeds" {
        return None;
    }
    let breed = segments.next()?;
    // the folder has to be followed by a file
    segments.next()?;
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
    if breed.is_empty() || !breed.chars().all(is_word) {
        return None;
    }
    Some(breed.to_owned())
}

/// Worker-local path for an image URL, served by the image proxy.
pub fn image_proxy_path(image_url: &str) -> Option<String> {
    let url = Url::parse(image_url).ok()?;
    let path = url.path().trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(format!("{}{}", IMAGES_PREFIX, path))
}

/// Where the image proxy fetches `/images/...` from. The path's case is kept;
/// image file names are case sensitive.
pub fn upstream_image_url(proxy_path: &str, settings: &Settings) -> Option<String> {
    if !proxy_path
        .get(..IMAGES_PREFIX.len())
        .map_or(false, |p| p.eq_ignore_ascii_case(IMAGES_PREFIX))
    {
        return None;
    }
    let rest = &proxy_path[IMAGES_PREFIX.len()..];
    if rest.is_empty() || rest.split('/').any(|s| s.is_empty() || s == "." || s == "..") {
        return None;
    }
    Some(format!(
        "{}/{}",
        settings.image_base_url.trim_end_matches('/'),
        rest
    ))
}

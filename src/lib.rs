extern crate cfg_if;
extern crate wasm_bindgen;

pub mod breeds;
pub mod charts;
pub mod config;
pub mod dog_api;
pub mod error;
pub mod extensions;
pub mod models;
mod shuffle;
mod templates;
mod utils;

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::extensions::*;
use crate::models::*;
use cfg_if::cfg_if;
use handlebars::Handlebars;
use http::StatusCode;
use js_sys::Promise;
use lazy_static::lazy_static;
use serde::Serialize;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise as ftp;
use web_sys::{FetchEvent, Headers, Request, Response, ResponseInit};

cfg_if! {
    // When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
    // allocator.
    if #[cfg(feature = "wee_alloc")] {
        extern crate wee_alloc;
        #[global_allocator]
        static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;
    }
}

type JsResult = Result<JsValue, JsValue>;

static BASE_LAYOUT_TEMPLATE: &str = "BASE_LAYOUT";
static ERROR_PAGE_TEMPLATE: &str = "ERROR_PAGE";
static HOME_PAGE_TEMPLATE: &str = "HOME_PAGE";
static DEFAULT_TITLE: &str = "Paw Shuffle";

lazy_static! {
    static ref HBARS: Handlebars = {
        let mut reg = Handlebars::new();

        assert!(reg
            .register_template_string(BASE_LAYOUT_TEMPLATE, templates::base::BASE_LAYOUT)
            .is_ok());
        assert!(reg
            .register_template_string(ERROR_PAGE_TEMPLATE, templates::error::ERROR_PAGE)
            .is_ok());
        assert!(reg
            .register_template_string(HOME_PAGE_TEMPLATE, templates::home::HOME_PAGE)
            .is_ok());

        reg
    };
    static ref SETTINGS: Settings = Settings::default();
}

fn render_error(status: StatusCode) -> Promise {
    match generate_error_response(status, None) {
        Ok(v) => Promise::resolve(&v),
        Err(e) => Promise::reject(&e),
    }
}

fn generate_error_response(status: StatusCode, msg: Option<&str>) -> JsResult {
    let body = render_error_page(status, msg).ok_or_js_err()?;
    let resp = generate_response(&body, status.as_u16(), &html_headers()?)?;
    Ok(JsValue::from(resp))
}

fn generate_response(body: &str, status: u16, headers: &Headers) -> Result<Response, JsValue> {
    let mut init = ResponseInit::new();
    init.status(status);
    init.headers(&JsValue::from(headers));
    Response::new_with_opt_str_and_init(Some(body), &init)
}

fn html_headers() -> Result<Headers, JsValue> {
    let headers = Headers::new()?;
    headers.append("content-type", "text/html; charset=utf-8")?;
    // every visit is a fresh shuffle
    headers.append("cache-control", "no-store")?;
    Ok(headers)
}

/// Renders the fallback page. Errors the user can do something about get an
/// "Another dog" button.
pub fn render_error_page(status: StatusCode, msg: Option<&str>) -> AppResult<String> {
    #[derive(Serialize)]
    struct Data {
        title: String,
        error_message: String,
        show_retry: bool,
    }
    let status_error_msg = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Error")
    );
    let error_message = match msg {
        Some(v) => v.to_owned(),
        None => status_error_msg.to_owned(),
    };
    let data = Data {
        title: format!("{} - {}", &status_error_msg, DEFAULT_TITLE),
        error_message,
        show_retry: status == StatusCode::BAD_GATEWAY,
    };

    HBARS
        .render(ERROR_PAGE_TEMPLATE, &data)
        .map_err(|e| AppError::Render(e.to_string()))
}

pub fn render_breed_page(profile: &BreedProfile) -> AppResult<String> {
    #[derive(Serialize)]
    struct Data<'a> {
        title: String,
        #[serde(flatten)]
        profile: &'a BreedProfile<'a>,
    }
    let data = Data {
        title: format!("{} - {}", profile.record.breed, DEFAULT_TITLE),
        profile,
    };

    HBARS
        .render(HOME_PAGE_TEMPLATE, &data)
        .map_err(|e| AppError::Render(e.to_string()))
}

async fn shuffle_breed_page() -> AppResult<String> {
    let settings: &'static Settings = &SETTINGS;
    let table = breeds::breed_table()?;
    let (image, record) = shuffle::find_breed(table, settings.max_attempts, || {
        dog_api::fetch_random_image(settings)
    })
    .await?;

    let image_src = dog_api::image_proxy_path(&image.url).unwrap_or_else(|| image.url.clone());
    let charts = charts::comparison_charts(table, record, settings.histogram_bins);
    render_breed_page(&BreedProfile::new(image, image_src, record, charts))
}

async fn render_home() -> JsResult {
    match shuffle_breed_page().await {
        Ok(body) => {
            let resp = generate_response(&body, 200, &html_headers()?)?;
            Ok(JsValue::from(resp))
        }
        Err(e) => {
            console_errorf!("Couldn't shuffle a dog: {}", e);
            generate_error_response(e.status(), Some(e.user_message().as_str()))
        }
    }
}

fn proxy_image(path: &str) -> Promise {
    let url = match dog_api::upstream_image_url(path, &SETTINGS) {
        Some(v) => v,
        None => return render_error(StatusCode::NOT_FOUND),
    };
    let request = match Request::new_with_str(&url) {
        Ok(v) => v,
        Err(e) => return Promise::reject(&e),
    };

    match dog_api::worker_scope() {
        Ok(scope) => scope.fetch_with_request(&request),
        Err(e) => {
            console_errorf!("Couldn't proxy {}: {}", url, e);
            render_error(StatusCode::BAD_GATEWAY)
        }
    }
}

#[wasm_bindgen]
pub fn main(event: FetchEvent) -> Promise {
    utils::set_panic_hook();
    let req = event.request();
    let url = match Url::parse(&req.url()).ok_or_js_err() {
        Ok(v) => v,
        Err(e) => return Promise::reject(&e),
    };
    let path = url.path().to_owned();
    let route = path.to_lowercase();
    let method = req.method().to_lowercase();
    let not_allowed = || render_error(StatusCode::METHOD_NOT_ALLOWED);

    match route.split('/').nth(1) {
        Some("") => match method.as_ref() {
            "get" => ftp(render_home()),
            _ => not_allowed(),
        },
        Some("images") => match method.as_ref() {
            "get" => proxy_image(&path),
            _ => not_allowed(),
        },
        _ => render_error(StatusCode::NOT_FOUND),
    }
}

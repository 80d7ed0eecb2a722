//! API utilities for frontend-backend communication
//!
//! Every call to the remote REST API goes through [`get_json`], [`send_json`]
//! or [`send_no_content`]. They resolve the URL against the configured base,
//! log the request, abort it after the configured timeout and turn non-success
//! responses into [`ApiError`] after logging them.

use contracts::shared::api_error::ApiError;
use contracts::shared::config::{join_endpoint, ClientConfig, Features};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::system::auth::storage;

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();

/// Install the configuration loaded at startup. Later calls are ignored.
pub fn init(config: ClientConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("API configuration already initialised");
    }
}

/// Minimal config used when the embedded profile cannot be parsed
pub fn fallback_config() -> ClientConfig {
    ClientConfig {
        api_url: "http://localhost:8080/api".to_string(),
        api_timeout_ms: 30_000,
        log_level: "info".to_string(),
        features: Default::default(),
    }
}

/// Console line for a startup that had to use [`fallback_config`]
pub fn fallback_notice(error: &dyn fmt::Display) -> String {
    format!(
        "Embedded config unreadable ({error}), using built-in defaults with API at {}",
        fallback_config().api_url
    )
}

/// Active client configuration
pub fn config() -> &'static ClientConfig {
    CONFIG.get_or_init(fallback_config)
}

/// Feature switches from the configuration context provided by the app root
pub fn use_features() -> Features {
    leptos::prelude::use_context::<ClientConfig>()
        .map(|c| c.features)
        .unwrap_or(config().features)
}

/// Get the base URL for API requests
///
/// A configured path such as "/api" is resolved against the current page
/// origin, so the bundle can be served behind the same host as the API.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/products/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let base = config().api_url.trim_end_matches('/').to_string();
    if !base.starts_with('/') {
        return base;
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, base)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products/123");
/// ```
pub fn api_url(path: &str) -> String {
    join_endpoint(&api_base(), path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        })
    }
}

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    let builder = match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    };
    let builder = builder.header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Send `request`, aborting it through `controller` once the configured timeout elapses
async fn dispatch(
    method: HttpMethod,
    url: &str,
    request: Request,
    controller: web_sys::AbortController,
) -> Result<Response, ApiError> {
    let timeout_ms = config().api_timeout_ms;
    let timed_out = Rc::new(Cell::new(false));

    let timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    log::debug!("{} {}", method, url);
    let result = request.send().await;
    timer.cancel();

    let response = match result {
        Ok(response) => response,
        Err(_) if timed_out.get() => {
            let err = ApiError::Timeout(timeout_ms);
            log::error!("HTTP Error [408] {} {}: {}", method, url, err);
            return Err(err);
        }
        Err(e) => {
            let err = ApiError::Network(e.to_string());
            log::error!("HTTP Error [0] {} {}: {}", method, url, err);
            return Err(err);
        }
    };

    if response.ok() {
        return Ok(response);
    }

    let body = response.text().await.ok();
    let err = ApiError::from_status(response.status(), &response.status_text(), body.as_deref());
    log::error!(
        "HTTP Error [{}] {} {}: {}",
        response.status(),
        method,
        url,
        err.user_message()
    );
    Err(err)
}

async fn send_built<F>(method: HttpMethod, path: &str, finish: F) -> Result<Response, ApiError>
where
    F: FnOnce(RequestBuilder) -> Result<Request, gloo_net::Error>,
{
    let url = api_url(path);
    let controller = web_sys::AbortController::new()
        .map_err(|e| ApiError::Network(format!("AbortController unavailable: {e:?}")))?;
    let signal = controller.signal();
    let request = finish(builder(method, &url).abort_signal(Some(&signal)))
        .map_err(|e| ApiError::Decode(format!("failed to build request: {e}")))?;
    dispatch(method, &url, request, controller).await
}

/// `GET path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send_built(HttpMethod::Get, path, |b| b.build()).await?;
    decode(response).await
}

/// `POST`/`PUT path` with a JSON body, decoding the JSON response
pub async fn send_json<B, T>(method: HttpMethod, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = send_built(method, path, |b| b.json(body)).await?;
    decode(response).await
}

/// `POST`/`PUT path` with a JSON body, ignoring the response body
pub async fn send_json_no_content<B: Serialize>(
    method: HttpMethod,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    send_built(method, path, |b| b.json(body)).await.map(|_| ())
}

/// Body-less request (typically `DELETE`), ignoring the response body
pub async fn send_no_content(method: HttpMethod, path: &str) -> Result<(), ApiError> {
    send_built(method, path, |b| b.build()).await.map(|_| ())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let url = response.url();
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_notice_names_builtin_defaults() {
        let notice = fallback_notice(&"missing field `api_url`");
        assert!(notice.contains("built-in defaults"));
        assert!(notice.contains("http://localhost:8080/api"));
        assert!(!notice.contains("development"));
    }
}

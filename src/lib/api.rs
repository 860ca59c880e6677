//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers do not store secrets or
//! tokens; they only attach headers provided by callers.

use super::{config::AppConfig, errors::AppError};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{Instrument, debug, info_span};

/// Shared HTTP client bound to the configured API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    timeout_ms: u32,
}

impl ApiClient {
    /// Builds a client from the frontend configuration.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_millis(u64::from(
            config.request_timeout_ms,
        )));
        let http = builder
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
        })
    }

    /// Fetches JSON with the provided headers.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, non-success status, or an undecodable body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let span = info_span!("api.request", http.method = "GET", url = %url);

        let mut builder = self.http.get(&url);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let response = self.send(builder).instrument(span).await?;
        handle_json_response(response).await
    }

    /// Posts JSON with the provided headers and parses a JSON response.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, non-success status, or an undecodable body.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let span = info_span!("api.request", http.method = "POST", url = %url);

        let mut builder = self
            .http
            .post(&url)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let response = self.send(builder.body(payload)).instrument(span).await?;
        handle_json_response(response).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        request.send().await.map_err(map_request_error)
    }

    /// Races the request against a timer; the browser fetch has no client-level timeout.
    #[cfg(target_arch = "wasm32")]
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        use futures::future::{Either, select};
        use gloo_timers::future::TimeoutFuture;

        let timeout = TimeoutFuture::new(self.timeout_ms);
        match select(Box::pin(request.send()), Box::pin(timeout)).await {
            Either::Left((result, _)) => result.map_err(map_request_error),
            Either::Right(((), _)) => Err(AppError::Timeout(
                "Request timed out. Please try again.".to_string(),
            )),
        }
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_decode() {
        AppError::Parse(format!("Failed to decode response: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with the server's message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await.map_err(map_request_error)?;
        serde_json::from_str::<T>(&body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "request rejected");
        Err(AppError::Http {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Extracts the `message` field of a JSON error body exactly as sent. An empty
/// string counts as no message.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

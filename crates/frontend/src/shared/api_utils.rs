//! Browser side of the access layer: a `gloo-net` transport and the client built on it.

use crate::shared::config::AppConfig;
use async_trait::async_trait;
use contracts::shared::api::{ApiClient, HttpTransport, Method, RawResponse, TransportError};
use gloo_net::http::Request;
use leptos::prelude::use_context;

/// Sends requests through the browser's `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<RawResponse, TransportError> {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");

        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Other(e.to_string()))?;

        // fetch only rejects when the server cannot be reached
        let response = request.send().await.map_err(|e| match e {
            gloo_net::Error::JsError(js) => TransportError::Unreachable(js.to_string()),
            other => TransportError::Other(other.to_string()),
        })?;

        let content_length = response
            .headers()
            .get("content-length")
            .and_then(|v| v.trim().parse::<u64>().ok());
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(RawResponse {
            status,
            status_text,
            content_length,
            body,
        })
    }
}

pub type Api = ApiClient<GlooTransport>;

/// Client bound to the configured API base. Call from component setup.
pub fn api_client() -> Api {
    let config = use_context::<AppConfig>().unwrap_or_default();
    ApiClient::new(GlooTransport, config.api_base)
}

/// Configured rows per page
pub fn page_size() -> usize {
    use_context::<AppConfig>().unwrap_or_default().page_size
}

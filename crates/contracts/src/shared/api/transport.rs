use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response as seen by the access layer, before any JSON handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    /// Value of the `content-length` header, if the server sent one
    pub content_length: Option<u64>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 204, `content-length: 0` or a blank body
    pub fn has_no_body(&self) -> bool {
        self.status == 204 || self.content_length == Some(0) || self.body.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never reached a server
    #[error("network unreachable: {0}")]
    Unreachable(String),

    #[error("{0}")]
    Other(String),
}

/// Sends one HTTP request. Implemented over `fetch` in the browser and by
/// an in-memory recorder in tests.
///
/// The browser executor is single-threaded, so futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<RawResponse, TransportError>;
}

//! HTTP access layer: one generic request function plus a typed client per entity.

pub mod client;
pub mod error;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::{ApiClient, EntityClient, RequestOptions};
pub use error::ApiError;
pub use transport::{HttpTransport, Method, RawResponse, TransportError};

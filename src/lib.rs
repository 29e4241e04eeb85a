//! reqkit
//!
//! A promise-style HTTP request pipeline: caller options are merged with
//! client defaults, a shared access credential is stamped into the headers,
//! the request goes out through a pluggable async transport, and the single
//! outcome is classified into `Ok(data)` or a structured error, with
//! user-facing notices keyed off the HTTP status code.
//!
//! # Example
//!
//! ```rust,ignore
//! use reqkit::prelude::*;
//!
//! let client = HttpClient::new(ClientConfig::default());
//! let banner = client
//!     .get("/banner", serde_json::json!({}), RequestOptions::default())
//!     .await?;
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod notify;
pub mod transport;
pub mod types;

pub use client::{HttpClient, HttpClientBuilder};
pub use config::ClientConfig;
pub use error::{RequestError, StatusError, TransportFailure};
pub use notify::{NoopNotifier, NoticeStyle, Notifier, TracingNotifier};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Method, RequestConfig, RequestOptions, TransportSuccess};

/// Common imports for callers.
pub mod prelude {
    pub use crate::client::{HttpClient, HttpClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{RequestError, StatusError, TransportFailure};
    pub use crate::notify::{NoopNotifier, NoticeStyle, Notifier, TracingNotifier};
    pub use crate::transport::{ReqwestTransport, Transport};
    pub use crate::types::{Method, RequestConfig, RequestOptions, TransportSuccess};
}

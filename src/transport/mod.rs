//! Transport seam.
//!
//! The pipeline never performs I/O itself; it hands a fully prepared
//! `RequestConfig` to a `Transport` and consumes its single outcome. The
//! trait keeps the core testable with in-process doubles; `ReqwestTransport`
//! is the production implementation.

use async_trait::async_trait;

use crate::error::TransportFailure;
use crate::types::{RequestConfig, TransportSuccess};

pub mod reqwest;

pub use self::reqwest::ReqwestTransport;

/// Performs one HTTP exchange for a prepared configuration.
///
/// Contract: exactly one outcome per call. A `TransportSuccess` whenever a
/// response arrived (any status code), a `TransportFailure` when the
/// exchange never completed. The transport is the sole enforcer of the
/// config's `timeout`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, config: &RequestConfig)
    -> Result<TransportSuccess, TransportFailure>;
}

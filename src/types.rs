//! Request and response data types.
//!
//! This module defines the configuration types flowing through the request
//! pipeline (`RequestOptions` → `RequestConfig`) and the plain-data
//! descriptors a transport produces (`TransportSuccess`). Everything here is
//! owned data; nothing outlives a single request.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Canonical uppercase name, as it appears on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied partial request configuration.
///
/// Only `url` is mandatory; every other field falls back to a client-level
/// default during normalization (see `ClientConfig::normalize`). Fields set
/// here always win over both the verb helpers' fixed values and the client
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Request URL. Relative URLs get the client's base URL prepended.
    pub url: String,
    /// HTTP method. Defaults to GET.
    pub method: Option<Method>,
    /// Request payload. Defaults to an empty JSON object.
    pub data: Option<Value>,
    /// Extra request headers. The `access-key` entry is always overwritten
    /// by the pre-request interceptor.
    pub header: Option<HashMap<String, String>>,
    /// Access credential for this request. Defaults to the client's key.
    pub access_key: Option<String>,
    /// Per-request timeout, enforced by the transport. Defaults to the
    /// client's timeout (10 s out of the box).
    pub timeout: Option<Duration>,
    /// Whether a transport failure should surface a user-facing notice.
    /// Defaults to true. Note the asymmetry: notices for non-2xx HTTP
    /// statuses (401/403/404/500 and the generic fallback) fire regardless
    /// of this flag; only the transport-failure notice respects it.
    pub show_error: Option<bool>,
}

impl RequestOptions {
    /// Create options for the given URL with everything else defaulted.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.header
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_show_error(mut self, show_error: bool) -> Self {
        self.show_error = Some(show_error);
        self
    }
}

/// Fully resolved request configuration.
///
/// Produced by normalization, completed by the pre-request interceptor,
/// then handed to the transport. Never mutated after dispatch.
///
/// Invariants: `url` is absolute (scheme-prefixed), and after the
/// pre-request interceptor `header` contains the `access-key` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub url: String,
    pub method: Method,
    pub data: Value,
    pub header: HashMap<String, String>,
    pub access_key: String,
    pub timeout: Duration,
    pub show_error: bool,
}

/// Outcome descriptor a transport yields when the HTTP exchange completed,
/// regardless of status code. Non-2xx responses still arrive through this
/// type; classification happens in the post-response interceptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportSuccess {
    pub status_code: u16,
    /// Response payload, parsed as JSON when possible.
    pub data: Value,
    /// Response headers, keys lowercased.
    pub header: HashMap<String, String>,
    /// Raw `set-cookie` values, in arrival order.
    pub cookies: Vec<String>,
    /// Transport-level status message. May be empty.
    pub err_msg: String,
}

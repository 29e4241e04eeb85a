//! Client configuration and request normalization.
//!
//! `ClientConfig` holds the client-level defaults (base URL, access key,
//! timeout) with init-once/never-mutate lifecycle, and turns caller-supplied
//! `RequestOptions` into a fully populated `RequestConfig`. Normalization is
//! pure data transformation and cannot fail.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{RequestConfig, RequestOptions};

/// Base URL prepended to relative request URLs.
pub const DEFAULT_BASE_URL: &str = "https://tea.qingnian8.com/api";
/// Access credential attached to every request unless overridden.
pub const DEFAULT_ACCESS_KEY: &str = "108745";
/// Per-request timeout when the caller does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Client-level defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for relative URLs.
    pub base_url: String,
    /// Default access credential.
    pub access_key: String,
    /// Default request timeout.
    #[serde(with = "duration_millis_serde")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: DEFAULT_ACCESS_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Builder for `ClientConfig` to construct configuration in a unified and safe way
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    access_key: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn access_key<S: Into<String>>(mut self, access_key: S) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration, filling unset fields from the defaults.
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            access_key: self.access_key.unwrap_or(defaults.access_key),
            timeout: self.timeout.unwrap_or(defaults.timeout),
        }
    }
}

impl ClientConfig {
    /// Returns a builder for constructing `ClientConfig`
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Merge caller options with the client defaults into a complete
    /// `RequestConfig`.
    ///
    /// A URL already starting with `http` is used verbatim; anything else
    /// gets `base_url` prepended, verbatim concatenation. `show_error`
    /// defaults to true and is false only when the caller said so.
    pub fn normalize(&self, options: RequestOptions) -> RequestConfig {
        let url = if options.url.starts_with("http") {
            options.url
        } else {
            format!("{}{}", self.base_url, options.url)
        };
        RequestConfig {
            url,
            method: options.method.unwrap_or_default(),
            data: options.data.unwrap_or_else(empty_object),
            header: options.header.unwrap_or_default(),
            access_key: options
                .access_key
                .unwrap_or_else(|| self.access_key.clone()),
            timeout: options.timeout.unwrap_or(self.timeout),
            show_error: options.show_error.unwrap_or(true),
        }
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

// Helper module for Duration serialization (milliseconds on the wire)
mod duration_millis_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

//! `reqwest`-backed transport.
//!
//! Maps a `RequestConfig` onto a reqwest request (GET data as query pairs,
//! other verbs as a JSON body) and the response back into the plain-data
//! `TransportSuccess` descriptor. Network errors become `TransportFailure`
//! with a `request:fail ...` message, so the pipeline's substring heuristic
//! classifies timeouts and connection problems the same way the host
//! platform's transport would have reported them.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::SET_COOKIE;
use std::collections::HashMap;

use crate::error::TransportFailure;
use crate::transport::Transport;
use crate::types::{Method, RequestConfig, TransportSuccess};

/// Production transport over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use a caller-configured client (proxy, TLS settings, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn dispatch(
        &self,
        config: &RequestConfig,
    ) -> Result<TransportSuccess, TransportFailure> {
        let mut builder = self
            .client
            .request(config.method.into(), &config.url)
            .timeout(config.timeout);
        for (key, value) in &config.header {
            builder = builder.header(key, value);
        }
        builder = match config.method {
            Method::Get => builder.query(&query_pairs(&config.data)),
            _ => builder.json(&config.data),
        };

        let response = builder
            .send()
            .await
            .map_err(|err| TransportFailure::new(failure_message(&err)))?;

        let status_code = response.status().as_u16();
        let err_msg = response.status().to_string();
        let mut header = HashMap::new();
        let mut cookies = Vec::new();
        for (name, value) in response.headers() {
            let Ok(value) = value.to_str() else { continue };
            if *name == SET_COOKIE {
                cookies.push(value.to_string());
            }
            header.insert(name.as_str().to_string(), value.to_string());
        }

        let body = response
            .text()
            .await
            .map_err(|err| TransportFailure::new(failure_message(&err)))?;
        let data = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
        };

        Ok(TransportSuccess {
            status_code,
            data,
            header,
            cookies,
            err_msg,
        })
    }
}

/// GET payloads travel as query pairs; scalar values are rendered bare,
/// anything nested falls back to its JSON text.
fn query_pairs(data: &serde_json::Value) -> Vec<(String, String)> {
    let Some(object) = data.as_object() else {
        return Vec::new();
    };
    object
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

fn failure_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request:fail timeout".to_string()
    } else {
        format!("request:fail {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_pairs_renders_scalars_bare() {
        let pairs = query_pairs(&json!({"page": 2, "q": "tea", "fresh": true}));
        let map: HashMap<_, _> = pairs.into_iter().collect();
        assert_eq!(map["page"], "2");
        assert_eq!(map["q"], "tea");
        assert_eq!(map["fresh"], "true");
    }

    #[test]
    fn query_pairs_ignores_non_objects() {
        assert!(query_pairs(&json!(null)).is_empty());
        assert!(query_pairs(&json!([1, 2])).is_empty());
    }

    #[test]
    fn method_maps_onto_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Get), reqwest::Method::GET);
        assert_eq!(
            reqwest::Method::from(Method::Delete),
            reqwest::Method::DELETE
        );
    }
}

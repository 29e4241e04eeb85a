//! Client facade.
//!
//! `HttpClient` wires the pipeline together: normalize caller options,
//! run the pre-request interceptor, dispatch through the transport, and
//! settle through the post-response interceptor. Verb helpers cover the
//! common calls; `request` exposes the full pipeline directly.

use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::interceptor;
use crate::notify::{NoticeStyle, Notifier, TracingNotifier};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Method, RequestOptions};

/// HTTP client over a pluggable transport and notifier.
///
/// Cheap to clone; clones share the transport and notifier. Each request
/// is an independent future with no state shared beyond the immutable
/// client configuration.
#[derive(Clone)]
pub struct HttpClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl HttpClient {
    /// Client with the given configuration, the reqwest transport, and the
    /// tracing notifier.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: Arc::new(ReqwestTransport::new()),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Returns a builder for swapping in a custom transport or notifier.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full pipeline: normalize → inject credential → dispatch → classify.
    ///
    /// Resolves with the response's raw `data` for 2xx statuses. Any
    /// failure comes back as `Err`: a transport failure verbatim, or a
    /// `StatusError` for non-2xx responses. A transport-failure notice is
    /// shown only when `show_error` is in effect; status notices are
    /// unconditional (see `RequestOptions::show_error`).
    pub async fn request(&self, options: RequestOptions) -> Result<Value, RequestError> {
        let config = self.config.normalize(options);
        let config = interceptor::before_request(config);
        tracing::debug!(
            target: "reqkit::http",
            method = %config.method,
            url = %config.url,
            "dispatching request"
        );

        match self.transport.dispatch(&config).await {
            Ok(outcome) => interceptor::handle_response(outcome, self.notifier.as_ref()),
            Err(failure) => {
                tracing::debug!(
                    target: "reqkit::http",
                    url = %config.url,
                    err = %failure,
                    "transport failure"
                );
                if config.show_error {
                    let notice = interceptor::transport_notice(&failure.err_msg);
                    self.notifier.notify(notice, NoticeStyle::None);
                }
                Err(failure.into())
            }
        }
    }

    /// GET request. Fields already set on `options` win over the fixed
    /// verb parameters, mirroring option-spread semantics.
    pub async fn get(
        &self,
        url: &str,
        data: Value,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        self.verb(Method::Get, url, data, options).await
    }

    /// POST request.
    pub async fn post(
        &self,
        url: &str,
        data: Value,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        self.verb(Method::Post, url, data, options).await
    }

    /// PUT request.
    pub async fn put(
        &self,
        url: &str,
        data: Value,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        self.verb(Method::Put, url, data, options).await
    }

    /// DELETE request.
    pub async fn delete(
        &self,
        url: &str,
        data: Value,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        self.verb(Method::Delete, url, data, options).await
    }

    async fn verb(
        &self,
        method: Method,
        url: &str,
        data: Value,
        mut options: RequestOptions,
    ) -> Result<Value, RequestError> {
        if options.url.is_empty() {
            options.url = url.to_string();
        }
        options.method.get_or_insert(method);
        options.data.get_or_insert(data);
        self.request(options).await
    }
}

/// Builder for `HttpClient`; unset parts fall back to the defaults
/// (`ReqwestTransport`, `TracingNotifier`, `ClientConfig::default()`).
#[derive(Default)]
pub struct HttpClientBuilder {
    config: Option<ClientConfig>,
    transport: Option<Arc<dyn Transport>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> HttpClient {
        HttpClient {
            config: self.config.unwrap_or_default(),
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(ReqwestTransport::new())),
            notifier: self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier)),
        }
    }
}

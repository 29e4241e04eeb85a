//! End-to-end pipeline tests over an in-process transport double.
//!
//! The transport records every dispatched `RequestConfig` and replays a
//! programmed outcome; the notifier records every notice. No network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqkit::prelude::*;
use serde_json::{Value, json};

struct MockTransport {
    outcome: Result<TransportSuccess, TransportFailure>,
    dispatched: Mutex<Vec<RequestConfig>>,
}

impl MockTransport {
    fn new(outcome: Result<TransportSuccess, TransportFailure>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            dispatched: Mutex::new(Vec::new()),
        })
    }

    fn dispatched(&self) -> Vec<RequestConfig> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn dispatch(
        &self,
        config: &RequestConfig,
    ) -> Result<TransportSuccess, TransportFailure> {
        self.dispatched.lock().unwrap().push(config.clone());
        self.outcome.clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, _style: NoticeStyle) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

fn response(status_code: u16, data: Value) -> TransportSuccess {
    TransportSuccess {
        status_code,
        data,
        header: HashMap::new(),
        cookies: Vec::new(),
        err_msg: "request:ok".to_string(),
    }
}

fn client_with(
    outcome: Result<TransportSuccess, TransportFailure>,
) -> (HttpClient, Arc<MockTransport>, Arc<RecordingNotifier>) {
    let transport = MockTransport::new(outcome);
    let notifier = Arc::new(RecordingNotifier::default());
    let client = HttpClient::builder()
        .config(ClientConfig::builder().base_url("https://api.test").build())
        .transport(transport.clone())
        .notifier(notifier.clone())
        .build();
    (client, transport, notifier)
}

#[tokio::test]
async fn two_xx_resolves_with_raw_data() {
    let payload = json!({"list": [1, 2, 3]});
    let (client, _, notifier) = client_with(Ok(response(200, payload.clone())));

    let data = client.request(RequestOptions::new("/banner")).await.unwrap();

    assert_eq!(data, payload);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn named_status_notifies_even_when_show_error_is_false() {
    let (client, _, notifier) = client_with(Ok(response(401, json!(null))));

    let err = client
        .request(RequestOptions::new("/secure").with_show_error(false))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(notifier.messages(), vec!["please log in first".to_string()]);
}

#[tokio::test]
async fn status_rejection_carries_code_message_and_payload() {
    let body = json!({"detail": "gone"});
    let (client, _, notifier) = client_with(Ok(response(404, body.clone())));

    let err = client.request(RequestOptions::new("/missing")).await.unwrap_err();

    match err {
        RequestError::Status(status) => {
            assert_eq!(status.status_code, 404);
            assert_eq!(status.err_msg, "request:ok");
            assert_eq!(status.data, body);
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(notifier.messages(), vec!["resource not found".to_string()]);
}

#[tokio::test]
async fn unlisted_status_notifies_with_raw_message() {
    let mut outcome = response(503, json!(null));
    outcome.err_msg = "service unavailable".to_string();
    let (client, _, notifier) = client_with(Ok(outcome));

    let err = client.request(RequestOptions::new("/busy")).await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(notifier.messages(), vec!["service unavailable".to_string()]);
}

#[tokio::test]
async fn transport_timeout_notifies_when_show_error_is_on() {
    let failure = TransportFailure::new("request:fail timeout");
    let (client, _, notifier) = client_with(Err(failure.clone()));

    let err = client.request(RequestOptions::new("/slow")).await.unwrap_err();

    assert_eq!(err, RequestError::Transport(failure));
    assert_eq!(
        notifier.messages(),
        vec!["request timed out, check network".to_string()]
    );
}

#[tokio::test]
async fn transport_failure_is_silent_when_show_error_is_off() {
    let failure = TransportFailure::new("request:fail timeout");
    let (client, _, notifier) = client_with(Err(failure.clone()));

    let err = client
        .request(RequestOptions::new("/slow").with_show_error(false))
        .await
        .unwrap_err();

    assert_eq!(err, RequestError::Transport(failure));
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn transport_fail_substring_maps_to_network_notice() {
    let (client, _, notifier) = client_with(Err(TransportFailure::new("request:fail abort")));

    client.request(RequestOptions::new("/x")).await.unwrap_err();

    assert_eq!(
        notifier.messages(),
        vec!["network abnormal, check connection".to_string()]
    );
}

#[tokio::test]
async fn unrecognized_transport_message_passes_through() {
    let (client, _, notifier) = client_with(Err(TransportFailure::new("socket hangup")));

    client.request(RequestOptions::new("/x")).await.unwrap_err();

    assert_eq!(notifier.messages(), vec!["socket hangup".to_string()]);
}

#[tokio::test]
async fn verbs_fix_method_and_prefix_url() {
    let (client, transport, _) = client_with(Ok(response(200, json!(null))));

    client
        .get("/foo", json!({}), RequestOptions::default())
        .await
        .unwrap();
    client
        .post("/foo", json!({}), RequestOptions::default())
        .await
        .unwrap();
    client
        .put("/foo", json!({}), RequestOptions::default())
        .await
        .unwrap();
    client
        .delete("/foo", json!({}), RequestOptions::default())
        .await
        .unwrap();

    let dispatched = transport.dispatched();
    let methods: Vec<Method> = dispatched.iter().map(|config| config.method).collect();
    assert_eq!(
        methods,
        vec![Method::Get, Method::Post, Method::Put, Method::Delete]
    );
    for config in &dispatched {
        assert_eq!(config.url, "https://api.test/foo");
    }
}

#[tokio::test]
async fn access_key_header_reaches_the_transport() {
    let (client, transport, _) = client_with(Ok(response(200, json!(null))));

    client
        .get("/foo", json!({}), RequestOptions::default())
        .await
        .unwrap();

    let dispatched = transport.dispatched();
    assert_eq!(dispatched[0].header["access-key"], dispatched[0].access_key);
}

#[tokio::test]
async fn explicit_options_override_verb_parameters() {
    let (client, transport, _) = client_with(Ok(response(200, json!(null))));

    client
        .get(
            "/foo",
            json!({}),
            RequestOptions::default().with_method(Method::Post),
        )
        .await
        .unwrap();

    assert_eq!(transport.dispatched()[0].method, Method::Post);
}

#[tokio::test]
async fn absolute_url_is_not_prefixed() {
    let (client, transport, _) = client_with(Ok(response(200, json!(null))));

    client
        .request(RequestOptions::new("https://elsewhere.test/v1/ping"))
        .await
        .unwrap();

    assert_eq!(transport.dispatched()[0].url, "https://elsewhere.test/v1/ping");
}

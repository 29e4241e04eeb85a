//! Request pipeline interceptors.
//!
//! Two pure steps bracket the transport call: `before_request` stamps the
//! access credential into the outgoing headers, and `handle_response`
//! classifies a completed exchange into `Ok(data)` or a `StatusError`,
//! firing the matching user notice. Both are plain functions so they can be
//! tested without a transport.

use serde_json::Value;

use crate::error::{RequestError, StatusError};
use crate::notify::{NoticeStyle, Notifier};
use crate::types::{RequestConfig, TransportSuccess};

/// Header name carrying the access credential.
pub const ACCESS_KEY_HEADER: &str = "access-key";

/// Substituted wherever the transport's status message is empty.
pub const FALLBACK_ERR_MSG: &str = "request failed";

/// Pre-request interceptor: guarantees `header["access-key"]` equals the
/// config's access key, overwriting any caller-supplied value under that
/// key. Token injection from persistent storage is deliberately absent.
pub fn before_request(mut config: RequestConfig) -> RequestConfig {
    config
        .header
        .insert(ACCESS_KEY_HEADER.to_string(), config.access_key.clone());
    config
}

/// Fixed user notice for the specially handled status codes.
///
/// Kept as a lookup rather than strings inline at the match arms so the
/// mapping stays reviewable in one place.
pub fn status_notice(status_code: u16) -> Option<&'static str> {
    match status_code {
        401 => Some("please log in first"),
        403 => Some("no permission"),
        404 => Some("resource not found"),
        500 => Some("internal server error"),
        _ => None,
    }
}

/// User notice for a transport-level failure, derived from the raw message
/// by substring heuristic. Fragile by design: the transport reports a
/// string, not a structured cause.
pub fn transport_notice(err_msg: &str) -> &str {
    if err_msg.is_empty() {
        FALLBACK_ERR_MSG
    } else if err_msg.contains("timeout") {
        "request timed out, check network"
    } else if err_msg.contains("fail") {
        "network abnormal, check connection"
    } else {
        err_msg
    }
}

/// Post-response interceptor: settles a completed exchange.
///
/// 2xx resolves with the raw payload. The named codes (401/403/404/500)
/// and the generic non-2xx fallback notify unconditionally (`show_error`
/// does not gate this path), then reject with a `StatusError`.
pub fn handle_response(
    response: TransportSuccess,
    notifier: &dyn Notifier,
) -> Result<Value, RequestError> {
    if (200..300).contains(&response.status_code) {
        return Ok(response.data);
    }

    let err_msg = if response.err_msg.is_empty() {
        FALLBACK_ERR_MSG.to_string()
    } else {
        response.err_msg
    };

    match status_notice(response.status_code) {
        Some(notice) => notifier.notify(notice, NoticeStyle::None),
        None => notifier.notify(&err_msg, NoticeStyle::None),
    }
    tracing::debug!(
        target: "reqkit::http",
        status = response.status_code,
        err = %err_msg,
        "request rejected"
    );

    Err(StatusError {
        status_code: response.status_code,
        err_msg,
        data: response.data,
    }
    .into())
}

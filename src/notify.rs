//! User-facing notification seam.
//!
//! The pipeline reports errors to the user through a `Notifier`, the
//! abstract equivalent of a transient toast. Rendering is out of scope;
//! the crate ships a `tracing`-backed implementation for headless use and
//! a no-op for callers that only want the returned error.

/// Icon/style hint accompanying a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeStyle {
    /// Plain text, no icon. Every notice the pipeline emits uses this.
    #[default]
    None,
    Success,
    Error,
}

/// "Show transient message" capability. Fire-and-forget; implementations
/// must not block the request path.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, style: NoticeStyle);
}

/// Notifier backed by `tracing`, for environments without a UI surface.
#[derive(Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, style: NoticeStyle) {
        tracing::info!(target: "reqkit::notify", style = ?style, "{message}");
    }
}

/// Notifier that drops every notice.
#[derive(Clone, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str, _style: NoticeStyle) {}
}

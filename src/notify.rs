//! User-facing notifications — the toast boundary.
//!
//! Every workflow outcome (listening, captured, success, each error kind) is
//! surfaced to the frontend as a [`Notification`].  Controllers emit them
//! through the [`Notifier`] trait so tests can record them and frontends can
//! route them to whatever toast/status widget they use.

// ---------------------------------------------------------------------------
// Severity / Notification
// ---------------------------------------------------------------------------

/// How the frontend should style a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral progress information (e.g. "Listening...").
    Info,
    /// A workflow completed successfully.
    Success,
    /// A failure the user must notice; the attempt is over, no retry occurs.
    Error,
}

/// A single toast-style message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Info,
        }
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Error,
        }
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Sink for notifications.  Implementations must be `Send + Sync` so
/// controllers can hold them behind `Arc<dyn Notifier>`.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

// Compile-time assertion: Box<dyn Notifier> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Notifier>) {}
};

/// Forwards notifications over a `std::sync::mpsc` channel.
///
/// A disconnected receiver is ignored — notifications are best-effort and
/// must never fail the workflow that emits them.
pub struct ChannelNotifier {
    tx: std::sync::mpsc::Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(tx: std::sync::mpsc::Sender<Notification>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            log::debug!("notification dropped (receiver gone): {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingNotifier  (test-only)
// ---------------------------------------------------------------------------

/// Test double that records every notification it receives.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    seen: std::sync::Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far.
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    /// Titles only, for terse assertions.
    pub fn titles(&self) -> Vec<String> {
        self.seen().into_iter().map(|n| n.title).collect()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Transient user notifications ("toasts").
//!
//! The cart manager only knows it has something to say; how long a toast
//! stays on screen and how it is dismissed belongs to the page. HTTP handlers
//! drain the [`ToastQueue`] into an `HX-Trigger` header that the client script
//! turns into a self-dismissing toast.

use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;

/// Receives fire-and-forget notification messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// A toast waiting to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub duration_ms: u64,
}

/// Collects toasts raised while handling one request.
#[derive(Debug)]
pub struct ToastQueue {
    duration: Duration,
    pending: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Take every queued toast, leaving the queue empty.
    pub fn drain(&self) -> Vec<Toast> {
        self.pending
            .lock()
            .map(|mut pending| std::mem::take(&mut *pending))
            .unwrap_or_default()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str) {
        let toast = Toast {
            message: message.to_string(),
            duration_ms: u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
        };
        match self.pending.lock() {
            Ok(mut pending) => pending.push(toast),
            Err(_) => tracing::warn!("Toast queue poisoned, dropping notification"),
        }
    }
}

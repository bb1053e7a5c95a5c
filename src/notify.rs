//! Desktop notifications.
//!
//! Delivery is best-effort: a missing or broken notification daemon
//! never affects the run's outcome.

use notify_rust::{Notification, Timeout, Urgency};
use tracing::debug;

/// Default expiry for outcome notifications.
const DEFAULT_TIMEOUT_MS: u32 = 2000;

/// Outcome reporting seam; the real sender talks to the desktop
/// notification daemon, tests record the calls.
pub trait NotificationSender {
    fn notify(&self, title: &str, message: &str);
}

/// [`NotificationSender`] over the session notification daemon.
pub struct DesktopNotifier;

impl NotificationSender for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) {
        notify_with(title, message, DEFAULT_TIMEOUT_MS, Urgency::Normal);
    }
}

/// Parametrized form of [`NotificationSender::notify`]: explicit
/// expiry and urgency. Failures are logged and swallowed.
pub fn notify_with(title: &str, message: &str, timeout_ms: u32, urgency: Urgency) {
    let result = Notification::new()
        .summary(title)
        .body(message)
        .urgency(urgency)
        .timeout(Timeout::Milliseconds(timeout_ms))
        .show();
    if let Err(e) = result {
        debug!(error = %e, "notification not delivered");
    }
}

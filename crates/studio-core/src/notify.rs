//! User-facing failure notifications.

use std::sync::Arc;

use log::error;

/// Receives the single user-visible message emitted for a failed mutation.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Notifier that writes to the log at `error` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        error!("{message}");
    }
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn notify_error(&self, message: &str) {
        (**self).notify_error(message)
    }
}

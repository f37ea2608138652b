//! Notification collaborator.

/// Fire-and-forget user-visible messages.
pub trait Notifier {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// Notifier that writes notices to stderr and the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(notice = message, "notice");
        eprintln!("{message}");
    }
}

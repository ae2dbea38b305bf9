//! Simulated action dispatch

use std::sync::Arc;

use log::info;

use super::EmailAction;

/// Sink for ephemeral, non-blocking user notifications (toasts)
///
/// Supplied by the application shell; the core never decides how a
/// notification is displayed or for how long.
pub trait Notifier: Send + Sync {
    fn notify(&self, text: &str);
}

/// Forwards simulated button presses to the shell's notifier
///
/// Pressing a button performs no state mutation; the press is logged and
/// the button's label is raised as a transient notification.
pub struct ActionDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl ActionDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Handle a button press on an open email
    pub fn press(&self, action: EmailAction) {
        info!("simulated action: {}", action.label());
        self.notifier.notify(action.label());
    }
}

//! Simulated email actions
//!
//! Provides the per-mailbox action button descriptors and a dispatcher that
//! surfaces presses as ephemeral notifications. No action mutates mail
//! state; the buttons are demonstration stubs.

mod buttons;
mod dispatch;

pub use buttons::{ActionButton, EmailAction, button_set};
pub use dispatch::{ActionDispatcher, Notifier};

//! Mail crate - Business logic for the demo email client
//!
//! This crate provides platform-independent functionality including:
//! - Domain models (Account, Email, MailboxType)
//! - A data provider abstraction over the compiled-in sample mailboxes
//! - An observable UI-state container with immutable snapshot semantics
//! - Action button descriptors and simulated action dispatch
//! - Window-size classification for adaptive navigation and layout
//!
//! This crate has zero UI dependencies. The presentation layer consumes
//! immutable [`UiState`] snapshots and renders them however it likes; all
//! mutations go through the [`StateStore`].

pub mod actions;
pub mod data;
pub mod error;
pub mod layout;
pub mod models;
pub mod state;

pub use actions::{ActionButton, ActionDispatcher, EmailAction, Notifier, button_set};
pub use data::{DemoMailData, MailDataSource};
pub use error::StateError;
pub use layout::{ContentType, LayoutSpec, NavigationType, WindowSizeClass};
pub use models::{Account, AccountId, Email, EmailBuilder, EmailId, MailboxType};
pub use state::{StateStore, SubscriberId, UiState};

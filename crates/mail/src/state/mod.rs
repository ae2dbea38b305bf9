//! Observable UI state
//!
//! [`UiState`] is one immutable picture of what the UI should show;
//! [`StateStore`] owns the current snapshot and is its only mutator.

mod store;
mod ui_state;

pub use store::{StateStore, SubscriberId};
pub use ui_state::UiState;

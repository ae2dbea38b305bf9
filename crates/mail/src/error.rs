//! Error types for state mutations

use crate::models::MailboxType;

/// Errors returned by [`StateStore`](crate::state::StateStore) mutations
///
/// The only fallible operation is selecting an email: the index must be a
/// valid position in the target mailbox's current list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("selection index {index} is out of bounds for {mailbox:?} ({len} emails)")]
    SelectionOutOfBounds {
        mailbox: MailboxType,
        index: usize,
        len: usize,
    },
}

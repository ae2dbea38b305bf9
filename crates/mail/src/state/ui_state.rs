//! Immutable UI state snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Email, MailboxType};

/// One self-consistent picture of what the UI should show
///
/// Snapshots are never mutated after publication; every change produces a
/// fresh value. All derived reads are total: an empty or unselected mailbox
/// yields an empty slice or `None`, never a panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Emails partitioned by mailbox; every variant has an entry
    pub mailboxes: HashMap<MailboxType, Vec<Email>>,
    /// Mailbox currently shown
    pub current_mailbox: MailboxType,
    /// Selected email index per mailbox; every variant has an entry.
    /// `None` means no email is open in that mailbox.
    pub selected: HashMap<MailboxType, Option<usize>>,
    /// Whether the detail screen replaces the list in list-only layouts
    pub showing_detail: bool,
}

impl UiState {
    /// Partition `emails` by their mailbox field, preserving source order
    pub fn new(emails: Vec<Email>) -> Self {
        let mut mailboxes: HashMap<MailboxType, Vec<Email>> = HashMap::new();
        let mut selected = HashMap::new();
        for mailbox in MailboxType::ALL {
            mailboxes.insert(mailbox, Vec::new());
            selected.insert(mailbox, None);
        }
        for email in emails {
            mailboxes.entry(email.mailbox).or_default().push(email);
        }

        Self {
            mailboxes,
            current_mailbox: MailboxType::Inbox,
            selected,
            showing_detail: false,
        }
    }

    /// Emails in the given mailbox, in source order
    pub fn emails_for_mailbox(&self, mailbox: MailboxType) -> &[Email] {
        self.mailboxes
            .get(&mailbox)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Emails in the current mailbox
    pub fn current_emails(&self) -> &[Email] {
        self.emails_for_mailbox(self.current_mailbox)
    }

    /// Recorded selection for the given mailbox
    pub fn selected_index(&self, mailbox: MailboxType) -> Option<usize> {
        self.selected.get(&mailbox).copied().flatten()
    }

    /// The email open in the current mailbox, if any
    pub fn selected_email(&self) -> Option<&Email> {
        let index = self.selected_index(self.current_mailbox)?;
        self.current_emails().get(index)
    }
}

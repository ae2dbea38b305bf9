//! Mailbox categories used both as partition keys and navigation tabs

use serde::{Deserialize, Serialize};

/// The four fixed email categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MailboxType {
    Inbox,
    Drafts,
    Sent,
    Spam,
}

impl MailboxType {
    /// All mailboxes in navigation order (drawer, rail and bottom bar)
    pub const ALL: [MailboxType; 4] = [
        MailboxType::Inbox,
        MailboxType::Sent,
        MailboxType::Drafts,
        MailboxType::Spam,
    ];

    /// Human-readable tab label
    pub fn display_name(&self) -> &'static str {
        match self {
            MailboxType::Inbox => "Inbox",
            MailboxType::Drafts => "Drafts",
            MailboxType::Sent => "Sent",
            MailboxType::Spam => "Spam",
        }
    }

    /// Icon asset key resolved by the presentation layer
    pub fn icon_name(&self) -> &'static str {
        match self {
            MailboxType::Inbox => "inbox",
            MailboxType::Drafts => "drafts",
            MailboxType::Sent => "send",
            MailboxType::Spam => "report",
        }
    }
}

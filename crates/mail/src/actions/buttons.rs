//! Per-mailbox action button descriptors

use serde::{Deserialize, Serialize};

use crate::models::MailboxType;

/// A simulated action available from an open email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailAction {
    Reply,
    ReplyAll,
    Delete,
    MoveToInbox,
    ContinueComposing,
}

impl EmailAction {
    /// Button label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            EmailAction::Reply => "Reply",
            EmailAction::ReplyAll => "Reply all",
            EmailAction::Delete => "Delete",
            EmailAction::MoveToInbox => "Move to inbox",
            EmailAction::ContinueComposing => "Continue composing",
        }
    }
}

/// Descriptor for one button in the detail view's action bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub action: EmailAction,
    /// Rendered in the destructive style; the action cannot be undone
    pub irreversible: bool,
}

/// The action buttons shown beneath an open email in the given mailbox
pub fn button_set(mailbox: MailboxType) -> &'static [ActionButton] {
    const DRAFTS: &[ActionButton] = &[ActionButton {
        action: EmailAction::ContinueComposing,
        irreversible: false,
    }];
    const SPAM: &[ActionButton] = &[
        ActionButton {
            action: EmailAction::MoveToInbox,
            irreversible: true,
        },
        ActionButton {
            action: EmailAction::Delete,
            irreversible: true,
        },
    ];
    const REPLIES: &[ActionButton] = &[
        ActionButton {
            action: EmailAction::Reply,
            irreversible: false,
        },
        ActionButton {
            action: EmailAction::ReplyAll,
            irreversible: false,
        },
    ];

    match mailbox {
        MailboxType::Drafts => DRAFTS,
        MailboxType::Spam => SPAM,
        MailboxType::Inbox | MailboxType::Sent => REPLIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafts_has_single_compose_button() {
        let buttons = button_set(MailboxType::Drafts);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].action, EmailAction::ContinueComposing);
        assert!(!buttons[0].irreversible);
    }

    #[test]
    fn test_spam_buttons_are_irreversible() {
        let buttons = button_set(MailboxType::Spam);
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|b| b.irreversible));
        assert_eq!(buttons[0].action, EmailAction::MoveToInbox);
        assert_eq!(buttons[1].action, EmailAction::Delete);
    }

    #[test]
    fn test_inbox_and_sent_share_reply_buttons() {
        assert_eq!(button_set(MailboxType::Inbox), button_set(MailboxType::Sent));
        let actions: Vec<_> = button_set(MailboxType::Inbox)
            .iter()
            .map(|b| b.action)
            .collect();
        assert_eq!(actions, vec![EmailAction::Reply, EmailAction::ReplyAll]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(EmailAction::ReplyAll.label(), "Reply all");
        assert_eq!(EmailAction::ContinueComposing.label(), "Continue composing");
    }
}

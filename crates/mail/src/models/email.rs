//! Email model representing a single message in a mailbox

use serde::{Deserialize, Serialize};

use super::{Account, MailboxType};

/// Unique identifier for an email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmailId(pub i64);

impl EmailId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EmailId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A single email message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier
    pub id: EmailId,
    /// Sender of the email
    pub sender: Account,
    /// Recipients, in order (may be empty for drafts)
    pub recipients: Vec<Account>,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
    /// Which mailbox the email currently lives in
    pub mailbox: MailboxType,
    /// Pre-formatted relative creation time (e.g. "20 mins ago").
    /// Not a timestamp; the sample data ships display-ready labels.
    pub created_at: String,
}

impl Email {
    /// Create a new email builder
    pub fn builder(id: impl Into<EmailId>, sender: Account) -> EmailBuilder {
        EmailBuilder::new(id.into(), sender)
    }
}

/// Builder for creating Email instances
pub struct EmailBuilder {
    id: EmailId,
    sender: Account,
    recipients: Vec<Account>,
    subject: String,
    body: String,
    mailbox: MailboxType,
    created_at: String,
}

impl EmailBuilder {
    fn new(id: EmailId, sender: Account) -> Self {
        Self {
            id,
            sender,
            recipients: Vec::new(),
            subject: String::new(),
            body: String::new(),
            mailbox: MailboxType::Inbox,
            created_at: String::new(),
        }
    }

    pub fn recipients(mut self, recipients: Vec<Account>) -> Self {
        self.recipients = recipients;
        self
    }

    pub fn recipient(mut self, recipient: Account) -> Self {
        self.recipients.push(recipient);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn mailbox(mut self, mailbox: MailboxType) -> Self {
        self.mailbox = mailbox;
        self
    }

    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn build(self) -> Email {
        Email {
            id: self.id,
            sender: self.sender,
            recipients: self.recipients,
            subject: self.subject,
            body: self.body,
            mailbox: self.mailbox,
            created_at: self.created_at,
        }
    }
}

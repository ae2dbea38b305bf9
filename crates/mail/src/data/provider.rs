//! Data provider trait definition

use crate::models::{Account, AccountId, Email, EmailId};

/// Trait for supplying the fixed set of sample accounts and emails
///
/// The provider is consumed once at startup; it performs no I/O and cannot
/// fail. Implementations must return the same data on every call.
pub trait MailDataSource: Send + Sync {
    /// The account that owns the mailboxes
    fn user_account(&self) -> Account;

    /// All contact accounts
    fn accounts(&self) -> Vec<Account>;

    /// Look up a contact account by id
    fn account_by_id(&self, id: AccountId) -> Option<Account>;

    /// The full email set, in source order
    fn emails(&self) -> Vec<Email>;

    /// Look up an email by id
    fn email_by_id(&self, id: EmailId) -> Option<Email>;
}

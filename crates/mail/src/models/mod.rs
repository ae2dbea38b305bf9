//! Domain models for the sample mail data set

mod account;
mod email;
mod mailbox;

pub use account::{Account, AccountId};
pub use email::{Email, EmailBuilder, EmailId};
pub use mailbox::MailboxType;

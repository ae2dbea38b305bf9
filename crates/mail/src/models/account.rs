//! Account model representing a person or organization

use serde::{Deserialize, Serialize};

/// Unique identifier for an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A person or organization that can send or receive mail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique integer identifier
    pub id: AccountId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Avatar asset key resolved by the presentation layer
    pub avatar: String,
}

impl Account {
    /// Create a new account
    pub fn new(
        id: impl Into<AccountId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }

    /// First and last name joined with a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

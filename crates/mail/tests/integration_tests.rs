//! Integration tests for the mail crate
//!
//! These tests exercise the public API end to end: fixture data through the
//! state store into derived snapshot reads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mail::{
    Account, DemoMailData, Email, MailDataSource, MailboxType, StateError, StateStore,
};
use mail::models::{AccountId, EmailId};

/// Fixture provider with a deliberately empty Spam mailbox
struct SparseMailData {
    emails: Vec<Email>,
}

impl SparseMailData {
    fn new() -> Self {
        let sender = Account::new(2, "Ada", "Byron", "ada.byron@example.com", "avatar_0");
        let emails = (0..5)
            .map(|i| {
                Email::builder(i, sender.clone())
                    .subject(format!("Inbox email {}", i))
                    .created_at("just now")
                    .build()
            })
            .collect();
        Self { emails }
    }
}

impl MailDataSource for SparseMailData {
    fn user_account(&self) -> Account {
        Account::new(1, "Test", "User", "user@example.com", "avatar_1")
    }

    fn accounts(&self) -> Vec<Account> {
        Vec::new()
    }

    fn account_by_id(&self, _id: AccountId) -> Option<Account> {
        None
    }

    fn emails(&self) -> Vec<Email> {
        self.emails.clone()
    }

    fn email_by_id(&self, id: EmailId) -> Option<Email> {
        self.emails.iter().find(|e| e.id == id).cloned()
    }
}

#[test]
fn test_partition_matches_source_filter() {
    let data = DemoMailData::new();
    let store = StateStore::new(&data);
    let state = store.snapshot();

    let source = data.emails();
    for mailbox in MailboxType::ALL {
        let expected: Vec<&Email> = source.iter().filter(|e| e.mailbox == mailbox).collect();
        let actual: Vec<&Email> = state.emails_for_mailbox(mailbox).iter().collect();
        assert_eq!(actual, expected, "{:?} bucket must preserve source order", mailbox);
    }
}

#[test]
fn test_partition_is_exact() {
    let data = DemoMailData::new();
    let state = StateStore::new(&data).snapshot();

    let mut partitioned: Vec<i64> = MailboxType::ALL
        .iter()
        .flat_map(|m| state.emails_for_mailbox(*m))
        .map(|e| e.id.as_i64())
        .collect();
    let mut source: Vec<i64> = data.emails().iter().map(|e| e.id.as_i64()).collect();

    partitioned.sort_unstable();
    source.sort_unstable();
    assert_eq!(partitioned, source);
}

#[test]
fn test_select_mailbox_switches_derived_list() {
    let store = StateStore::new(&DemoMailData::new());
    store.select_mailbox(MailboxType::Sent);

    let state = store.snapshot();
    assert_eq!(state.current_mailbox, MailboxType::Sent);
    assert_eq!(
        state.current_emails(),
        state.emails_for_mailbox(MailboxType::Sent)
    );
}

#[test]
fn test_selection_survives_tab_switches() {
    let store = StateStore::new(&DemoMailData::new());
    store.select_email(MailboxType::Inbox, Some(2)).unwrap();

    store.select_mailbox(MailboxType::Sent);
    store.select_mailbox(MailboxType::Inbox);

    let state = store.snapshot();
    assert_eq!(state.selected_index(MailboxType::Inbox), Some(2));
    assert_eq!(state.selected_email().map(|e| e.id.as_i64()), Some(2));
}

#[test]
fn test_empty_mailbox_has_no_selected_email() {
    let store = StateStore::new(&SparseMailData::new());
    store.select_mailbox(MailboxType::Spam);

    let state = store.snapshot();
    assert!(state.current_emails().is_empty());
    assert!(state.selected_email().is_none());

    // Only clearing is accepted for an empty mailbox.
    assert!(store.select_email(MailboxType::Spam, None).is_ok());
    assert!(store.select_email(MailboxType::Spam, Some(0)).is_err());
}

#[test]
fn test_select_first_inbox_email() {
    let data = DemoMailData::new();
    let store = StateStore::new(&data);
    store.select_email(MailboxType::Inbox, Some(0)).unwrap();

    let state = store.snapshot();
    let first = state.emails_for_mailbox(MailboxType::Inbox)[0].clone();
    assert_eq!(state.selected_email(), Some(&first));
}

#[test]
fn test_initial_snapshots_are_deterministic() {
    let a = StateStore::new(&DemoMailData::new()).snapshot();
    let b = StateStore::new(&DemoMailData::new()).snapshot();
    assert_eq!(*a, *b);
}

#[test]
fn test_rejected_selection_publishes_nothing() {
    let store = StateStore::new(&SparseMailData::new());
    let publishes = Arc::new(AtomicUsize::new(0));

    let publishes_clone = publishes.clone();
    store.subscribe(move |_| {
        publishes_clone.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(publishes.load(Ordering::SeqCst), 1); // replay on subscribe

    let err = store.select_email(MailboxType::Inbox, Some(5)).unwrap_err();
    assert!(matches!(err, StateError::SelectionOutOfBounds { len: 5, index: 5, .. }));
    assert_eq!(publishes.load(Ordering::SeqCst), 1);

    store.select_email(MailboxType::Inbox, Some(4)).unwrap();
    assert_eq!(publishes.load(Ordering::SeqCst), 2);
}

#[test]
fn test_detail_navigation_round_trip() {
    let store = StateStore::new(&DemoMailData::new());

    store.open_email(MailboxType::Inbox, 1).unwrap();
    let state = store.snapshot();
    assert!(state.showing_detail);
    assert_eq!(state.selected_email().map(|e| e.id.as_i64()), Some(1));

    store.close_detail();
    let state = store.snapshot();
    assert!(!state.showing_detail);
    assert_eq!(state.selected_index(MailboxType::Inbox), Some(1));
}

#[test]
fn test_snapshot_serializes_round_trip() {
    let store = StateStore::new(&DemoMailData::new());
    store.select_email(MailboxType::Inbox, Some(3)).unwrap();

    let state = store.snapshot();
    let json = serde_json::to_string(&*state).unwrap();
    let restored: mail::UiState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, *state);
}

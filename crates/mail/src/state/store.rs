//! Observable state container
//!
//! The store owns the current [`UiState`] and is its exclusive mutator.
//! Publication is synchronous and last-value-wins: the snapshot reference
//! is swapped atomically, then every subscriber is invoked with the new
//! value before the mutating call returns. Subscribers receive the latest
//! snapshot immediately on subscription.
//!
//! Snapshots are `Arc`ed and immutable, so readers on other threads can
//! hold onto one for as long as they like.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, warn};

use crate::data::MailDataSource;
use crate::error::StateError;
use crate::models::MailboxType;

use super::UiState;

/// Handle returned by [`StateStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Observer = Box<dyn Fn(&Arc<UiState>) + Send + Sync>;

/// Owner and sole mutator of the current UI state
pub struct StateStore {
    current: RwLock<Arc<UiState>>,
    subscribers: RwLock<Vec<(SubscriberId, Observer)>>,
    next_subscriber: AtomicU64,
}

impl StateStore {
    /// Build the initial snapshot by partitioning the provider's emails
    pub fn new(provider: &dyn MailDataSource) -> Self {
        let state = UiState::new(provider.emails());
        for mailbox in MailboxType::ALL {
            debug!(
                "{}: {} emails",
                mailbox.display_name(),
                state.emails_for_mailbox(mailbox).len()
            );
        }

        Self {
            current: RwLock::new(Arc::new(state)),
            subscribers: RwLock::new(Vec::new()),
            next_subscriber: AtomicU64::new(0),
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<UiState> {
        self.current.read().unwrap().clone()
    }

    /// Register an observer; the latest snapshot is delivered synchronously
    /// before this call returns
    pub fn subscribe<F>(&self, observer: F) -> SubscriberId
    where
        F: Fn(&Arc<UiState>) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .write()
            .unwrap()
            .push((id, Box::new(observer)));

        let latest = self.snapshot();
        let subscribers = self.subscribers.read().unwrap();
        if let Some((_, observer)) = subscribers.iter().find(|(sub, _)| *sub == id) {
            observer(&latest);
        }
        id
    }

    /// Remove an observer; subsequent publishes no longer reach it
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.write().unwrap().retain(|(sub, _)| *sub != id);
    }

    /// Switch the current mailbox
    ///
    /// Only `current_mailbox` changes; every mailbox's stored selection
    /// survives, so switching away and back restores the open email.
    pub fn select_mailbox(&self, mailbox: MailboxType) {
        debug!("current mailbox -> {}", mailbox.display_name());
        let mut next = (*self.snapshot()).clone();
        next.current_mailbox = mailbox;
        self.publish(next);
    }

    /// Record the selection for `mailbox`, or clear it with `None`
    ///
    /// The index is validated against the mailbox's list before anything is
    /// published; an out-of-range index leaves the state untouched.
    pub fn select_email(
        &self,
        mailbox: MailboxType,
        index: Option<usize>,
    ) -> Result<(), StateError> {
        let mut next = (*self.snapshot()).clone();
        self.check_bounds(&next, mailbox, index)?;
        next.selected.insert(mailbox, index);
        self.publish(next);
        Ok(())
    }

    /// Select an email and open the detail screen in one publish
    pub fn open_email(&self, mailbox: MailboxType, index: usize) -> Result<(), StateError> {
        let mut next = (*self.snapshot()).clone();
        self.check_bounds(&next, mailbox, Some(index))?;
        next.selected.insert(mailbox, Some(index));
        next.showing_detail = true;
        self.publish(next);
        Ok(())
    }

    /// Return from the detail screen to the list; selection is kept
    pub fn close_detail(&self) {
        let mut next = (*self.snapshot()).clone();
        next.showing_detail = false;
        self.publish(next);
    }

    fn check_bounds(
        &self,
        state: &UiState,
        mailbox: MailboxType,
        index: Option<usize>,
    ) -> Result<(), StateError> {
        let len = state.emails_for_mailbox(mailbox).len();
        match index {
            Some(i) if i >= len => {
                warn!(
                    "rejected selection {} for {} ({} emails)",
                    i,
                    mailbox.display_name(),
                    len
                );
                Err(StateError::SelectionOutOfBounds { mailbox, index: i, len })
            }
            _ => Ok(()),
        }
    }

    /// Swap in the new snapshot, then notify every subscriber with it
    fn publish(&self, next: UiState) {
        let next = Arc::new(next);
        *self.current.write().unwrap() = next.clone();

        let subscribers = self.subscribers.read().unwrap();
        for (_, observer) in subscribers.iter() {
            observer(&next);
        }
    }
}

use std::sync::mpsc::{self, Sender};

use tracing::debug;

use crate::store::{CredentialEntry, Store, Subscription};

/// In-memory, observable credential list. Nothing is written to disk.
#[derive(Default)]
pub struct MemoryStore {
    entries: Vec<CredentialEntry>,
    /// Registered observers, in registration order.
    observers: Vec<Sender<Vec<CredentialEntry>>>,
}

impl MemoryStore {
    pub fn new(entries: Vec<CredentialEntry>) -> Self {
        Self {
            entries,
            observers: Vec::new(),
        }
    }

    fn notify(&mut self) {
        let entries = &self.entries;
        // A failed send means the subscription was dropped.
        self.observers.retain(|tx| tx.send(entries.clone()).is_ok());
        debug!(
            entries = self.entries.len(),
            observers = self.observers.len(),
            "notified observers"
        );
    }
}

impl Store for MemoryStore {
    fn observe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        // The receiver is alive, so the initial send cannot fail.
        let _ = tx.send(self.entries.clone());
        self.observers.push(tx);
        Subscription::new(rx)
    }

    fn replace_all(&mut self, entries: Vec<CredentialEntry>) {
        self.entries = entries;
        self.notify();
    }

    fn update_secret_by_name(&mut self, name: &str, secret: &str) {
        let updated = self
            .entries
            .iter()
            .map(|entry| {
                if entry.name == name {
                    entry.with_secret(secret)
                } else {
                    entry.clone()
                }
            })
            .collect();
        self.replace_all(updated);
    }

    fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }
}

pub mod entry;
pub mod memory;

use std::sync::mpsc::Receiver;

pub use entry::{CredentialEntry, EntryView, IconRef};
pub use memory::MemoryStore;

/// Core abstraction for the credential list. Sessions and commands interact only with this trait.
///
/// Every operation is total: there is no error type.
pub trait Store {
    /// Register an observer. The returned subscription already holds the current list.
    fn observe(&mut self) -> Subscription;

    /// Swap the stored list for `entries` and notify observers.
    fn replace_all(&mut self, entries: Vec<CredentialEntry>);

    /// Set the secret on every entry named `name`, then notify observers.
    fn update_secret_by_name(&mut self, name: &str, secret: &str);

    fn entries(&self) -> &[CredentialEntry];

    /// First entry named `name`.
    fn find(&self, name: &str) -> Option<&CredentialEntry> {
        self.entries().iter().find(|e| e.name == name)
    }
}

/// Receiving end of an observer registration.
///
/// States arrive in the order the store produced them. Dropping the
/// subscription unregisters it.
pub struct Subscription {
    rx: Receiver<Vec<CredentialEntry>>,
    current: Vec<CredentialEntry>,
}

impl Subscription {
    pub(crate) fn new(rx: Receiver<Vec<CredentialEntry>>) -> Self {
        Self {
            rx,
            current: Vec::new(),
        }
    }

    /// Next undelivered state, if any.
    pub fn try_next(&mut self) -> Option<Vec<CredentialEntry>> {
        let next = self.rx.try_recv().ok()?;
        self.current = next.clone();
        Some(next)
    }

    /// Drain pending states and return the most recent one.
    pub fn latest(&mut self) -> &[CredentialEntry] {
        while self.try_next().is_some() {}
        &self.current
    }
}

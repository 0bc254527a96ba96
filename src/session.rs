use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use crate::error::PasslistError;
use crate::store::{CredentialEntry, Store};

pub type Result<T> = std::result::Result<T, PasslistError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Favorites,
}

/// Presentation state over a [`Store`]: which list is on screen, the search
/// text, and the user actions that rewrite the list.
///
/// Every mutation goes through `replace_all` or `update_secret_by_name`;
/// the store knows nothing about favorites or searching.
pub struct Session<'s, S: Store> {
    store: &'s mut S,
    view: View,
    search: String,
}

impl<'s, S: Store> Session<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            view: View::default(),
            search: String::new(),
        }
    }

    pub fn store(&mut self) -> &mut S {
        &mut *self.store
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Entries on screen for the current view and search text.
    pub fn visible(&self) -> Vec<CredentialEntry> {
        self.filter(self.store.entries())
    }

    /// Keep the entries of `entries` shown by the current view whose name
    /// contains the search text, ignoring case. Order is preserved.
    pub fn filter(&self, entries: &[CredentialEntry]) -> Vec<CredentialEntry> {
        let needle = self.search.to_lowercase();
        entries
            .iter()
            .filter(|e| self.view == View::Home || e.is_favorite)
            .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Flip the favorite flag of `name`; returns the new flag.
    pub fn toggle_favorite(&mut self, name: &str) -> Result<bool> {
        let target = self.lookup(name)?.clone();
        let updated = self
            .store
            .entries()
            .iter()
            .map(|e| if *e == target { e.toggled() } else { e.clone() })
            .collect();
        self.store.replace_all(updated);
        info!(entry = name, favorite = !target.is_favorite, "toggled favorite");
        Ok(!target.is_favorite)
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        let target = self.lookup(name)?.clone();
        let remaining = self
            .store
            .entries()
            .iter()
            .filter(|e| **e != target)
            .cloned()
            .collect();
        self.store.replace_all(remaining);
        info!(entry = name, "deleted entry");
        Ok(())
    }

    /// Apply the edit-password form: both fields filled in and identical.
    pub fn update_password(
        &mut self,
        name: &str,
        new: &SecretString,
        confirm: &SecretString,
    ) -> Result<()> {
        self.lookup(name)?;
        let (new, confirm) = (new.expose_secret(), confirm.expose_secret());
        if new.is_empty() || confirm.is_empty() {
            return Err(PasslistError::EmptyPassword);
        }
        if new != confirm {
            return Err(PasslistError::PasswordMismatch);
        }
        self.store.update_secret_by_name(name, new);
        info!(entry = name, "updated password");
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&CredentialEntry> {
        self.store
            .find(name)
            .ok_or_else(|| PasslistError::EntryNotFound(name.to_string()))
    }
}

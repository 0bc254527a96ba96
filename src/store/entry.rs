use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// Opaque reference to the icon shown next to an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IconRef {
    fn default() -> Self {
        Self::new("default")
    }
}

/// One named credential record.
///
/// `name` is the lookup key but is not required to be unique.
#[derive(Clone, Debug)]
pub struct CredentialEntry {
    pub icon: IconRef,
    pub name: String,
    pub secret: SecretString,
    pub is_favorite: bool,
}

impl CredentialEntry {
    pub fn new(icon: IconRef, name: impl Into<String>, secret: &str, is_favorite: bool) -> Self {
        Self {
            icon,
            name: name.into(),
            secret: SecretString::new(secret.to_string()),
            is_favorite,
        }
    }

    /// Copy of this entry with a different secret.
    pub fn with_secret(&self, secret: &str) -> Self {
        Self {
            secret: SecretString::new(secret.to_string()),
            ..self.clone()
        }
    }

    /// Copy of this entry with the favorite flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

impl PartialEq for CredentialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.icon == other.icon
            && self.name == other.name
            && self.is_favorite == other.is_favorite
            && self.secret.expose_secret() == other.secret.expose_secret()
    }
}

impl Eq for CredentialEntry {}

/// JSON view of an entry. The secret is only included when `reveal` is set.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub icon: &'a IconRef,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "expose_opt")]
    pub secret: Option<&'a SecretString>,
    pub favorite: bool,
}

impl<'a> EntryView<'a> {
    pub fn new(entry: &'a CredentialEntry, reveal: bool) -> Self {
        Self {
            icon: &entry.icon,
            name: &entry.name,
            secret: reveal.then_some(&entry.secret),
            favorite: entry.is_favorite,
        }
    }
}

fn expose_opt<S: Serializer>(secret: &Option<&SecretString>, s: S) -> Result<S::Ok, S::Error> {
    match secret {
        Some(secret) => s.serialize_str(secret.expose_secret()),
        None => s.serialize_none(),
    }
}

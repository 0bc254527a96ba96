use crate::store::{CredentialEntry, IconRef};

/// The list a fresh store starts with when the config supplies none.
pub fn seed_entries() -> Vec<CredentialEntry> {
    vec![
        CredentialEntry::new(IconRef::new("facebook"), "Facebook", "uziel1290", true),
        CredentialEntry::new(IconRef::new("instagram"), "Instagram", "uzielitomix", false),
        CredentialEntry::new(IconRef::new("tiktok"), "Tik Tok", "uziel1228", false),
        CredentialEntry::new(IconRef::new("mercado_pago"), "Mercado Pago", "jonathan78", true),
        CredentialEntry::new(IconRef::new("google"), "Google", "hernandez58", true),
    ]
}

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::render;
use crate::session::{Session, View};
use crate::store::{CredentialEntry, EntryView, MemoryStore};

pub fn run(
    cfg: &Config,
    favorites: bool,
    search: Option<&str>,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let mut store = MemoryStore::new(cfg.seed());
    let entries = select(&mut store, favorites, search);
    let mut out = std::io::stdout().lock();
    if json {
        write_json(&mut out, &entries, reveal)
    } else {
        render::entries(&mut out, &entries, cfg.mask_secrets && !reveal)?;
        Ok(())
    }
}

fn select(store: &mut MemoryStore, favorites: bool, search: Option<&str>) -> Vec<CredentialEntry> {
    let mut session = Session::new(store);
    if favorites {
        session.set_view(View::Favorites);
    }
    if let Some(text) = search {
        session.set_search(text);
    }
    session.visible()
}

fn write_json<W: Write>(out: &mut W, entries: &[CredentialEntry], reveal: bool) -> Result<()> {
    let views: Vec<EntryView> = entries.iter().map(|e| EntryView::new(e, reveal)).collect();
    serde_json::to_writer_pretty(&mut *out, &views).context("Failed to encode entries")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_entries;

    fn names(entries: &[CredentialEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn json(entries: &[CredentialEntry], reveal: bool) -> serde_json::Value {
        let mut buf = Vec::new();
        write_json(&mut buf, entries, reveal).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_select_all_by_default() {
        let mut store = MemoryStore::new(seed_entries());
        assert_eq!(select(&mut store, false, None), seed_entries());
    }

    #[test]
    fn test_favorites_with_search() {
        let mut store = MemoryStore::new(seed_entries());
        let selected = select(&mut store, true, Some("PAGO"));
        assert_eq!(names(&selected), vec!["Mercado Pago"]);
    }

    #[test]
    fn test_json_hides_secrets_unless_revealed() {
        let mut store = MemoryStore::new(seed_entries());
        let favorites = select(&mut store, true, None);

        let value = json(&favorites, false);
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "Facebook");
        assert!(items[0].get("secret").is_none());

        let value = json(&favorites, true);
        assert_eq!(value[1]["secret"], "jonathan78");
    }
}

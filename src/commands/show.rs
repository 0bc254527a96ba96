use anyhow::Result;

use crate::config::Config;
use crate::error::PasslistError;
use crate::render;
use crate::store::{MemoryStore, Store};

pub fn run(cfg: &Config, name: &str) -> Result<()> {
    let store = MemoryStore::new(cfg.seed());
    let entry = store
        .find(name)
        .ok_or_else(|| PasslistError::EntryNotFound(name.to_string()))?;
    render::detail(&mut std::io::stdout().lock(), entry)?;
    Ok(())
}

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::shell::{Shell, TerminalPrompt};
use crate::store::{MemoryStore, Store};

pub fn run(cfg: &Config) -> Result<()> {
    let mut store = MemoryStore::new(cfg.seed());
    info!(entries = store.entries().len(), "starting shell");

    println!("passlist: changes last until you quit; nothing is written to disk.");
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut shell = Shell::new(&mut store, TerminalPrompt, cfg.mask_secrets);
    shell.run(stdin, &mut stdout)
}

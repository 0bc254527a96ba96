use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{self, Config, SeedEntry};
use crate::seed::seed_entries;

pub fn run() -> Result<()> {
    let root = config::project_root()?;
    run_in(&root)?;

    println!("Wrote {}.", config::config_path(&root).display());
    println!();
    println!("Edit the [[entries]] tables to change the starting list.");
    println!("The file is only read at startup; changes made in the shell are not saved.");

    Ok(())
}

/// Write the starter config under `root`, refusing to overwrite an existing one.
fn run_in(root: &Path) -> Result<()> {
    let cfg_path = config::config_path(root);

    if cfg_path.exists() {
        bail!(
            "passlist is already initialized in this directory. \
             Edit {} or delete it first.",
            cfg_path.display()
        );
    }

    let cfg = Config {
        entries: seed_entries().iter().map(SeedEntry::from).collect(),
        ..Config::default()
    };
    config::write(root, &cfg).context("Failed to write config")?;
    Ok(())
}

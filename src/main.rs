mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod render;
mod seed;
mod session;
mod shell;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cfg = config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Init => commands::init::run()?,
        Command::Shell => commands::shell::run(&cfg)?,
        Command::List {
            favorites,
            search,
            reveal,
            json,
        } => commands::list::run(&cfg, favorites, search.as_deref(), reveal, json)?,
        Command::Show { name } => commands::show::run(&cfg, &name)?,
    }

    Ok(())
}

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use std::io::{self, BufRead, Write};

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.data_dir)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");

    match cli.command {
        Command::Folder(args) => folder::run(args, &config),
        Command::List(args) => list::run(args, &config),
        Command::Add(args) => add::run(args, &config),
        Command::Remove(args) => remove::run(args, &config),
        Command::Import(args) => import::run(args, &config),
        Command::Export(args) => export::run(args, &config),
        Command::Dedup(args) => dedup::run(args, &config),
    }
}

/// `[y/N]` の確認プロンプト（y / yes のみ肯定）
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

pub mod add;
pub mod dedup;
pub mod export;
pub mod folder;
pub mod import;
pub mod list;
pub mod remove;

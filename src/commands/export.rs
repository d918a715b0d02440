//! vfm export コマンド

use crate::config::Config;
use crate::error::Result;
use crate::export::{export_folder, to_json};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Folder code (default: default_folder from config.toml)
    pub folder: Option<String>,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let code = config.resolve_folder(args.folder)?;
    let store = config.open_store();

    let entries = export_folder(&store, &code)?;
    let json = to_json(&entries)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "{} Exported {} entries from '{}' to {}",
                "✓".green(),
                entries.len(),
                code,
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

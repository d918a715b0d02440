//! vfm folder コマンド

use crate::config::Config;
use crate::error::Result;
use crate::folder::FolderRegistry;
use crate::vocabulary::Vocabulary;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: FolderCommand,
}

#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List folders with their entry counts
    List,

    /// Create a folder
    Add {
        /// Folder code (unique key)
        code: String,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Change the display name of a folder
    Rename {
        code: String,
        name: String,
    },

    /// Delete a folder and every vocabulary entry in it
    Delete {
        code: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let store = config.open_store();
    let registry = FolderRegistry::new(&store);

    match args.command {
        FolderCommand::List => {
            let folders = registry.list()?;
            if folders.is_empty() {
                println!("No folders yet");
                return Ok(());
            }

            let collection = Vocabulary::new(&store).load()?;
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec!["Code", "Name", "Entries"]);
            for folder in &folders {
                table.add_row(vec![
                    folder.code.clone(),
                    folder.name.clone(),
                    collection.count_by_folder(&folder.code).to_string(),
                ]);
            }
            println!("{table}");
        }
        FolderCommand::Add { code, name } => {
            let folder = registry.create(&code, &name)?;
            println!("{} Folder '{}' created.", "✓".green(), folder.label());
        }
        FolderCommand::Rename { code, name } => {
            registry.rename(&code, &name)?;
            println!("{} Folder '{}' renamed to '{}'.", "✓".green(), code, name);
        }
        FolderCommand::Delete { code, force } => {
            let Some(folder) = registry.get(&code)? else {
                return Err(crate::error::VfmError::FolderNotFound(code));
            };

            let prompt = format!(
                "Delete folder '{}' and all of its vocabulary?",
                folder.label()
            );
            if !force && !super::confirm(&prompt)? {
                println!("Delete cancelled.");
                return Ok(());
            }

            let deletion = registry.delete_folder(&code)?;
            println!(
                "{} Folder '{}' deleted ({} entries removed).",
                "✓".green(),
                deletion.folder.label(),
                deletion.removed_entries
            );
        }
    }

    Ok(())
}

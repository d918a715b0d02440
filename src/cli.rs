use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{add, dedup, export, folder, import, list, remove};

#[derive(Debug, Parser)]
#[command(name = "vfm")]
#[command(about = "Vocabulary Folder Manager CLI", long_about = None)]
pub struct Cli {
    /// Data directory (default: $VFM_HOME, then ~/.vfm)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage folders
    Folder(folder::Args),

    /// List the vocabulary of a folder
    List(list::Args),

    /// Add a single vocabulary entry
    Add(add::Args),

    /// Remove a vocabulary entry from a folder
    Remove(remove::Args),

    /// Import vocabulary from a JSON document
    Import(import::Args),

    /// Export a folder as a JSON document
    Export(export::Args),

    /// Find and remove duplicate entries in a folder
    Dedup(dedup::Args),
}

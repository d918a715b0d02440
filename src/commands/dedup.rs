//! vfm dedup コマンド
//!
//! 重複グループを表示し、確認後に各グループの最初の1件だけを残す。

use crate::config::Config;
use crate::dedup::{DedupEngine, DuplicateGroup};
use crate::error::Result;
use crate::output::CommandSummary;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Folder code (default: default_folder from config.toml)
    pub folder: Option<String>,

    /// Only show the duplicate groups
    #[arg(long, conflicts_with = "force")]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let code = config.resolve_folder(args.folder)?;
    let store = config.open_store();
    let engine = DedupEngine::new(&store);

    let plan = engine.scan(&code)?;
    if plan.is_empty() {
        println!("No duplicate entries in folder '{}'.", code);
        return Ok(());
    }

    println!("{} Duplicate entries found:", "i".blue());
    for group in &plan.groups {
        tracing::debug!(key = %group.display_key(), members = group.members.len(), "duplicate group");
        println!("{}", group_line(group));
    }

    if args.dry_run {
        return Ok(());
    }

    let prompt = format!(
        "Remove {} duplicate entries? One copy of each word is kept.",
        plan.surplus_count()
    );
    if !args.force && !super::confirm(&prompt)? {
        println!("Dedup cancelled.");
        return Ok(());
    }

    let outcome = engine.commit(&plan)?;
    CommandSummary::dedup(&outcome).print();
    Ok(())
}

fn group_line(group: &DuplicateGroup) -> String {
    format!(
        "  • \"{}\" - \"{}\" ({} copies)",
        group.word,
        group.meaning,
        group.members.len()
    )
}

//! vfm list コマンド
//!
//! フォルダ内の語彙を単語順に表示する。

use crate::config::Config;
use crate::error::{Result, VfmError};
use crate::folder::FolderRegistry;
use crate::import::now_millis;
use crate::vocabulary::{VocabEntry, Vocabulary};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Folder code (default: default_folder from config.toml)
    pub folder: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only "word<TAB>meaning" lines
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let code = config.resolve_folder(args.folder)?;
    let store = config.open_store();

    let folder = FolderRegistry::new(&store)
        .get(&code)?
        .ok_or_else(|| VfmError::FolderNotFound(code.clone()))?;
    let entries = Vocabulary::new(&store).list_by_folder(&code)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if args.simple {
        for entry in &entries {
            println!("{}\t{}", entry.word, entry.meaning);
        }
    } else if entries.is_empty() {
        println!("No vocabulary in folder '{}'", folder.label());
    } else {
        println!("{}", build_table(&entries, now_millis()));
        println!("{} entries in '{}'", entries.len(), folder.label());
    }

    Ok(())
}

/// 表の1行分
fn row(entry: &VocabEntry, now: i64) -> Vec<String> {
    vec![
        entry.word.clone(),
        entry.pronunciation.clone(),
        entry.meaning.clone(),
        format!("Lv:{}", entry.level),
        format!("{}d", entry.days_until_next_review(now)),
        entry.last_review_label(),
    ]
}

fn build_table(entries: &[VocabEntry], now: i64) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Word",
        "Pronunciation",
        "Meaning",
        "Level",
        "Next",
        "Last review",
    ]);
    for entry in entries {
        table.add_row(row(entry, now));
    }
    table
}

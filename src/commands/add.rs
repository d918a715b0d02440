//! vfm add コマンド

use crate::config::Config;
use crate::error::{Result, VfmError};
use crate::folder::FolderRegistry;
use crate::import::now_millis;
use crate::vocabulary::{VocabEntry, Vocabulary};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Folder code
    pub folder: String,

    pub word: String,

    pub meaning: String,

    #[arg(long, short = 'p', default_value = "")]
    pub pronunciation: String,

    #[arg(long, short = 'l', default_value_t = 0)]
    pub level: u32,
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let entry = build_entry(args, now_millis())?;
    let store = config.open_store();

    if FolderRegistry::new(&store).get(&entry.folder_code)?.is_none() {
        return Err(VfmError::FolderNotFound(entry.folder_code));
    }

    let vocabulary = Vocabulary::new(&store);
    if vocabulary.is_duplicate(&entry.word, &entry.meaning, &entry.folder_code)? {
        println!(
            "{} '{}' - '{}' already exists in '{}'.",
            "•".yellow(),
            entry.word,
            entry.meaning,
            entry.folder_code
        );
        return Ok(());
    }

    let summary = format!(
        "Added '{}' - '{}' to '{}'.",
        entry.word, entry.meaning, entry.folder_code
    );
    vocabulary.add(entry)?;
    println!("{} {}", "✓".green(), summary);
    Ok(())
}

/// 引数から未学習のエントリを作成（次回復習は現在時刻）
fn build_entry(args: Args, now: i64) -> Result<VocabEntry> {
    let word = args.word.trim();
    let meaning = args.meaning.trim();
    if word.is_empty() || meaning.is_empty() {
        return Err(VfmError::InvalidInput(
            "Word and meaning must not be empty".to_string(),
        ));
    }

    let mut entry = VocabEntry::new(args.folder, word, meaning);
    entry.pronunciation = args.pronunciation;
    entry.level = args.level;
    entry.next_review_time = now;
    Ok(entry)
}

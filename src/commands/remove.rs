//! vfm remove コマンド

use crate::config::Config;
use crate::error::Result;
use crate::vocabulary::Vocabulary;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Folder code
    pub folder: String,

    pub word: String,

    pub meaning: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let (word, meaning) = target(&args);
    let store = config.open_store();
    let vocabulary = Vocabulary::new(&store);

    if !vocabulary.contains(&args.folder, word, meaning)? {
        println!(
            "{} No entry '{}' - '{}' in '{}'.",
            "•".yellow(),
            word,
            meaning,
            args.folder
        );
        return Ok(());
    }

    let prompt = format!("Remove '{}' - '{}'?", word, meaning);
    if !args.force && !super::confirm(&prompt)? {
        println!("Remove cancelled.");
        return Ok(());
    }

    // 一致するエントリはすべて削除される
    let removed = vocabulary.remove(&args.folder, word, meaning)?;
    println!("{} Removed {} entries.", "✓".green(), removed);
    Ok(())
}

/// `add` と同じく前後の空白を除いた (単語, 意味)
fn target(args: &Args) -> (&str, &str) {
    (args.word.trim(), args.meaning.trim())
}

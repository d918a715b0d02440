//! vfm import コマンド
//!
//! ファイル、標準入力、またはコマンドライン引数のJSONを取り込む。

use crate::config::Config;
use crate::error::{Result, VfmError};
use crate::import::ImportPipeline;
use crate::output::CommandSummary;
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// JSON file to import ("-" reads stdin)
    #[arg(conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// JSON document given inline
    #[arg(long)]
    pub text: Option<String>,

    /// Folder for items without an "s" field (default: default_folder from config.toml)
    #[arg(long, short = 'F')]
    pub folder: Option<String>,
}

pub fn run(args: Args, config: &Config) -> Result<()> {
    let folder = config.resolve_folder(args.folder)?;
    let text = read_document(args.file.as_deref(), args.text)?;

    let store = config.open_store();
    let report = ImportPipeline::new(&store).import_text(&text, &folder)?;

    CommandSummary::import(&report).print();
    Ok(())
}

/// 文書テキストを取得する
pub(crate) fn read_document(file: Option<&Path>, text: Option<String>) -> Result<String> {
    let content = match (file, text) {
        (_, Some(text)) => text,
        (Some(path), None) if path == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        (Some(path), None) => std::fs::read_to_string(path).map_err(|e| {
            VfmError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
        })?,
        (None, None) => {
            return Err(VfmError::InvalidInput(
                "Specify a JSON file, '-' for stdin, or --text".to_string(),
            ))
        }
    };

    if content.trim().is_empty() {
        return Err(VfmError::InvalidInput("JSON document is empty".to_string()));
    }
    Ok(content)
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;

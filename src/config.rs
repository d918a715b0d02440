//! 設定とデータディレクトリの解決

use crate::error::{Result, VfmError};
use crate::store::{FileStore, StoreAccessor};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// データディレクトリを指定する環境変数
pub const DATA_DIR_ENV: &str = "VFM_HOME";

/// 設定ファイル名（データディレクトリ直下）
const CONFIG_FILE: &str = "config.toml";

/// config.toml の内容
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    default_folder: Option<String>,
}

/// 実行時設定
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// フォルダ未指定時に使うフォルダコード
    pub default_folder: Option<String>,
}

impl Config {
    /// 優先順位: 引数 > VFM_HOME > ~/.vfm
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Self::load_from(data_dir)
    }

    pub fn load_from(data_dir: PathBuf) -> Result<Self> {
        let file = read_config_file(&data_dir.join(CONFIG_FILE))?;
        Ok(Self {
            data_dir,
            default_folder: file.default_folder.filter(|s| !s.is_empty()),
        })
    }

    /// ストアを開く
    pub fn open_store(&self) -> StoreAccessor<FileStore> {
        StoreAccessor::new(FileStore::new(&self.data_dir))
    }

    /// 明示されたフォルダ、なければ既定フォルダ
    pub fn resolve_folder(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .filter(|s| !s.is_empty())
            .or_else(|| self.default_folder.clone())
            .ok_or_else(|| {
                VfmError::InvalidInput(format!(
                    "No folder given and no default_folder set in {}",
                    self.data_dir.join(CONFIG_FILE).display()
                ))
            })
    }
}

/// 環境変数を取得（空文字列はNoneとして扱う）
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env_var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = env_var("HOME").ok_or_else(|| {
        VfmError::Config(format!(
            "HOME environment variable not set; set {} or pass --data-dir",
            DATA_DIR_ENV
        ))
    })?;
    Ok(PathBuf::from(home).join(".vfm"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .map_err(|e| VfmError::Config(format!("Failed to parse {}: {}", path.display(), e))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

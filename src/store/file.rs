//! ファイルベースのキーバリューストア

use super::KeyValueStore;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// データディレクトリ内に `<key>.json` として値を保存するストア
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// キーに対応するファイルパス
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// 同じディレクトリに一時ファイルを作成して内容を書き込む
    fn stage(&self, value: &str) -> Result<NamedTempFile> {
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.flush()?;
        Ok(temp_file)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value.to_string())])
    }

    /// 全キーの一時ファイルを用意してから、まとめてアトミックに置換する
    fn set_many(&self, pairs: &[(&str, String)]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let mut staged = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            staged.push((self.path_for(key), self.stage(value)?, value.len()));
        }

        for (path, temp_file, bytes) in staged {
            temp_file.persist(&path).map_err(|e| e.error)?;
            tracing::debug!(path = %path.display(), bytes, "persisted");
        }

        Ok(())
    }
}

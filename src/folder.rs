//! フォルダレジストリ
//!
//! フォルダはコードで識別される。語彙エントリとはコードによる外部キーでのみ関連する。

use crate::error::{Result, VfmError};
use crate::store::{lenient, KeyValueStore, StoreAccessor};
use crate::vocabulary::VocabCollection;
use serde::{Deserialize, Serialize};

/// フォルダ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: String,
    /// 表示名（空でもよい）
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
}

impl Folder {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// `CODE - name` 形式の表示ラベル
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.code.clone()
        } else {
            format!("{} - {}", self.code, self.name)
        }
    }
}

/// フォルダ削除の結果
#[derive(Debug, Clone)]
pub struct FolderDeletion {
    pub folder: Folder,
    pub removed_entries: usize,
}

/// フォルダの作成・削除を管理する
pub struct FolderRegistry<'a, S: KeyValueStore> {
    store: &'a StoreAccessor<S>,
}

impl<'a, S: KeyValueStore> FolderRegistry<'a, S> {
    pub fn new(store: &'a StoreAccessor<S>) -> Self {
        Self { store }
    }

    /// 保存順のフォルダ一覧
    pub fn list(&self) -> Result<Vec<Folder>> {
        self.store.folders()
    }

    pub fn get(&self, code: &str) -> Result<Option<Folder>> {
        Ok(self.list()?.into_iter().find(|f| f.code == code))
    }

    /// 存在しなければ空の名前でフォルダを作成する
    ///
    /// 作成した場合のみ保存し `true` を返す。
    pub fn ensure_folder(&self, code: &str) -> Result<bool> {
        let mut folders = self.list()?;
        if folders.iter().any(|f| f.code == code) {
            return Ok(false);
        }

        folders.push(Folder::new(code, ""));
        self.store.save_folders(&folders)?;
        tracing::info!(folder = code, "created folder");
        Ok(true)
    }

    /// 明示的なフォルダ作成
    pub fn create(&self, code: &str, name: &str) -> Result<Folder> {
        let code = code.trim();
        if code.is_empty() {
            return Err(VfmError::InvalidInput(
                "Folder code cannot be empty".to_string(),
            ));
        }

        let mut folders = self.list()?;
        if folders.iter().any(|f| f.code == code) {
            return Err(VfmError::FolderExists(code.to_string()));
        }

        let folder = Folder::new(code, name);
        folders.push(folder.clone());
        self.store.save_folders(&folders)?;
        tracing::info!(folder = code, "created folder");
        Ok(folder)
    }

    /// 表示名を変更
    pub fn rename(&self, code: &str, name: &str) -> Result<()> {
        let mut folders = self.list()?;
        let folder = folders
            .iter_mut()
            .find(|f| f.code == code)
            .ok_or_else(|| VfmError::FolderNotFound(code.to_string()))?;

        folder.name = name.to_string();
        self.store.save_folders(&folders)
    }

    /// フォルダと所属する語彙エントリをすべて削除
    ///
    /// 両コレクションは1回の書き込みでまとめて保存される。
    pub fn delete_folder(&self, code: &str) -> Result<FolderDeletion> {
        let mut folders = self.list()?;
        let idx = folders
            .iter()
            .position(|f| f.code == code)
            .ok_or_else(|| VfmError::FolderNotFound(code.to_string()))?;
        let folder = folders.remove(idx);

        let mut collection = VocabCollection::from_entries(self.store.vocabularies()?);
        let removed_entries = collection.remove_folder(code);

        self.store.save_all(&folders, &collection.to_entries())?;
        tracing::info!(folder = code, removed_entries, "deleted folder");

        Ok(FolderDeletion {
            folder,
            removed_entries,
        })
    }
}

#[cfg(test)]
#[path = "folder_test.rs"]
mod tests;

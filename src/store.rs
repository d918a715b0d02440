//! ストアアクセサ
//!
//! 2つの名前付きコレクション（フォルダと語彙エントリ）への型付きアクセスを提供する。
//! 永続化の仕組みは `KeyValueStore` トレイトで抽象化され、
//! 本番では `FileStore`、テストでは `MemoryStore` を使用する。

mod file;
pub(crate) mod lenient;
#[cfg(test)]
pub mod memory;

pub use file::FileStore;

use crate::error::{Result, VfmError};
use crate::folder::Folder;
use crate::vocabulary::VocabEntry;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// フォルダ一覧を保存するキー
pub const FOLDERS_KEY: &str = "folders";

/// 語彙エントリ一覧を保存するキー
pub const VOCABULARIES_KEY: &str = "vocabularies";

/// 文字列値を保存するキーバリューストア
///
/// 値は常にコレクション全体を表すJSON文字列。最後の書き込みが勝つ。
pub trait KeyValueStore: Send + Sync {
    /// 値を取得（存在しなければ None）
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 値を書き込み（既存値は上書き）
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// 複数キーを1つの論理単位として書き込み
    ///
    /// デフォルト実装は順番に `set` するだけ。
    fn set_many(&self, pairs: &[(&str, String)]) -> Result<()> {
        for (key, value) in pairs {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// フォルダと語彙エントリへの型付きアクセス
pub struct StoreAccessor<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreAccessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 下位ストアへの参照
    #[cfg(test)]
    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn folders(&self) -> Result<Vec<Folder>> {
        self.read_collection(FOLDERS_KEY)
    }

    pub fn save_folders(&self, folders: &[Folder]) -> Result<()> {
        let content = serialize(folders)?;
        self.store.set(FOLDERS_KEY, &content)
    }

    pub fn vocabularies(&self) -> Result<Vec<VocabEntry>> {
        self.read_collection(VOCABULARIES_KEY)
    }

    pub fn save_vocabularies(&self, entries: &[VocabEntry]) -> Result<()> {
        let content = serialize(entries)?;
        self.store.set(VOCABULARIES_KEY, &content)
    }

    /// フォルダと語彙エントリをまとめて保存
    ///
    /// 両方のシリアライズが成功してから書き込みを開始する。
    pub fn save_all(&self, folders: &[Folder], entries: &[VocabEntry]) -> Result<()> {
        let folders = serialize(folders)?;
        let entries = serialize(entries)?;
        self.store
            .set_many(&[(FOLDERS_KEY, folders), (VOCABULARIES_KEY, entries)])
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(content) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        // "null" は空コレクションとして扱う
        let items: Option<Vec<T>> =
            serde_json::from_str(&content).map_err(|source| VfmError::CorruptStore {
                key: key.to_string(),
                source,
            })?;

        let items = items.unwrap_or_default();
        tracing::debug!(key, count = items.len(), "loaded collection");
        Ok(items)
    }
}

fn serialize<T: Serialize>(items: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

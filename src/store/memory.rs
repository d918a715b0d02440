//! テスト用インメモリストア

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用インメモリストア
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    writes: RwLock<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            writes: RwLock::new(0),
        }
    }

    /// 生の値を設定（書き込み回数には数えない）
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// 生の値を取得
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    /// `set` / `set_many` が呼ばれた回数
    pub fn write_count(&self) -> usize {
        *self.writes.read().unwrap()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        *self.writes.write().unwrap() += 1;
        Ok(())
    }

    fn set_many(&self, pairs: &[(&str, String)]) -> Result<()> {
        let mut values = self.values.write().unwrap();
        for (key, value) in pairs {
            values.insert(key.to_string(), value.clone());
        }
        *self.writes.write().unwrap() += 1;
        Ok(())
    }
}

/// テスト用: 指定内容で初期化したアクセサを作成
pub fn accessor_with(folders: &str, vocabularies: &str) -> StoreAccessor<MemoryStore> {
    StoreAccessor::new(
        MemoryStore::new()
            .with_raw(FOLDERS_KEY, folders)
            .with_raw(VOCABULARIES_KEY, vocabularies),
    )
}

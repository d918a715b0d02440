//! 語彙コレクション
//!
//! 全フォルダの語彙エントリを1つの集合として扱う。
//! 各操作は最新の保存内容を読み込み、変更後のコレクション全体を書き戻す。

mod collection;
mod entry;

pub use collection::{EntryId, VocabCollection};
#[cfg(test)]
pub use collection::locale_cmp;
pub use entry::VocabEntry;

use crate::error::Result;
use crate::store::{KeyValueStore, StoreAccessor};

/// ストアに裏付けられた語彙コレクション操作
pub struct Vocabulary<'a, S: KeyValueStore> {
    store: &'a StoreAccessor<S>,
}

impl<'a, S: KeyValueStore> Vocabulary<'a, S> {
    pub fn new(store: &'a StoreAccessor<S>) -> Self {
        Self { store }
    }

    /// 保存済みのコレクションを読み込み
    pub fn load(&self) -> Result<VocabCollection> {
        Ok(VocabCollection::from_entries(self.store.vocabularies()?))
    }

    /// コレクション全体を保存
    pub fn save(&self, collection: &VocabCollection) -> Result<()> {
        self.store.save_vocabularies(&collection.to_entries())
    }

    /// フォルダ内の有効なエントリを単語順で取得
    pub fn list_by_folder(&self, folder_code: &str) -> Result<Vec<VocabEntry>> {
        Ok(self.load()?.list_by_folder(folder_code))
    }

    /// (フォルダ, 単語, 意味) が一致するエントリが存在するか
    pub fn contains(&self, folder_code: &str, word: &str, meaning: &str) -> Result<bool> {
        Ok(self
            .load()?
            .iter()
            .any(|(_, e)| e.matches(folder_code, word, meaning)))
    }

    pub fn is_duplicate(&self, word: &str, meaning: &str, folder_code: &str) -> Result<bool> {
        Ok(self.load()?.is_duplicate(word, meaning, folder_code))
    }

    /// 一致するエントリをすべて削除
    pub fn remove(&self, folder_code: &str, word: &str, meaning: &str) -> Result<usize> {
        let mut collection = self.load()?;
        let removed = collection.remove_matching(folder_code, word, meaning);
        if removed > 0 {
            self.save(&collection)?;
            tracing::info!(folder = folder_code, word, removed, "removed entries");
        }
        Ok(removed)
    }

    /// エントリを追加（重複チェックは呼び出し側の責任）
    pub fn add(&self, entry: VocabEntry) -> Result<()> {
        let mut collection = self.load()?;
        tracing::info!(folder = %entry.folder_code, word = %entry.word, "added entry");
        collection.push(entry);
        self.save(&collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{accessor_with, MemoryStore};

    #[test]
    fn list_by_folder_reads_fresh_state_each_call() {
        let store = StoreAccessor::new(MemoryStore::new());
        let vocabulary = Vocabulary::new(&store);

        assert!(vocabulary.list_by_folder("A").unwrap().is_empty());

        vocabulary.add(VocabEntry::new("A", "dog", "chó")).unwrap();

        assert_eq!(vocabulary.list_by_folder("A").unwrap().len(), 1);
    }

    #[test]
    fn list_by_folder_skips_invalid_persisted_entries() {
        let store = accessor_with(
            "[]",
            r#"[{"s":"A","w":"","m":"x"},{"s":"A","w":"dog","m":"chó"},{"s":"A","w":"cat"}]"#,
        );

        let listed = Vocabulary::new(&store).list_by_folder("A").unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].word, "dog");
    }

    #[test]
    fn add_does_not_check_duplicates() {
        let store = StoreAccessor::new(MemoryStore::new());
        let vocabulary = Vocabulary::new(&store);

        vocabulary.add(VocabEntry::new("A", "dog", "chó")).unwrap();
        vocabulary.add(VocabEntry::new("A", "dog", "chó")).unwrap();

        assert_eq!(store.vocabularies().unwrap().len(), 2);
        assert!(vocabulary.is_duplicate("dog", "chó", "A").unwrap());
    }

    #[test]
    fn remove_deletes_all_matches_and_persists() {
        let store = accessor_with(
            "[]",
            r#"[{"s":"A","w":"dog","m":"chó"},{"s":"A","w":"dog","m":"chó"},{"s":"A","w":"cat","m":"mèo"}]"#,
        );
        let vocabulary = Vocabulary::new(&store);

        assert_eq!(vocabulary.remove("A", "dog", "chó").unwrap(), 2);

        let remaining = store.vocabularies().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].word, "cat");
    }

    #[test]
    fn contains_matches_folder_word_and_meaning() {
        let store = accessor_with("[]", r#"[{"s":"A","w":"dog","m":"chó"}]"#);
        let vocabulary = Vocabulary::new(&store);

        assert!(vocabulary.contains("A", "dog", "chó").unwrap());
        assert!(!vocabulary.contains("B", "dog", "chó").unwrap());
        assert!(!vocabulary.contains("A", "dog", "mèo").unwrap());
    }

    #[test]
    fn remove_without_match_does_not_write() {
        let store = accessor_with("[]", r#"[{"s":"A","w":"dog","m":"chó"}]"#);

        assert_eq!(Vocabulary::new(&store).remove("A", "cat", "mèo").unwrap(), 0);
        assert_eq!(store.inner().write_count(), 0);
    }
}

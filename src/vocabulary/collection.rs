use super::VocabEntry;
use std::cmp::Ordering;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 読み込み時に割り当てるエントリの識別子
///
/// 永続化された並びにおける位置。フィールド内容とは独立しているため、
/// 内容が完全に同じ複数のエントリを区別できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    #[cfg(test)]
    pub fn new(index: usize) -> Self {
        Self(index)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    id: EntryId,
    entry: VocabEntry,
}

/// 全フォルダにまたがる語彙エントリの集合（挿入順を保持）
#[derive(Debug, Clone, Default)]
pub struct VocabCollection {
    slots: Vec<Slot>,
    next_id: usize,
}

impl VocabCollection {
    pub fn from_entries(entries: Vec<VocabEntry>) -> Self {
        let mut collection = Self::default();
        for entry in entries {
            collection.push(entry);
        }
        collection
    }

    /// 永続化用に内容を取り出す
    pub fn to_entries(&self) -> Vec<VocabEntry> {
        self.slots.iter().map(|slot| slot.entry.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &VocabEntry)> {
        self.slots.iter().map(|slot| (slot.id, &slot.entry))
    }

    pub fn get(&self, id: EntryId) -> Option<&VocabEntry> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.entry)
    }

    /// エントリを末尾に追加
    pub fn push(&mut self, entry: VocabEntry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot { id, entry });
        id
    }

    /// フォルダ内の有効なエントリを単語順で取得
    ///
    /// 同じ単語同士は元の順序を保つ（安定ソート）。
    pub fn list_by_folder(&self, folder_code: &str) -> Vec<VocabEntry> {
        let mut entries: Vec<VocabEntry> = self
            .slots
            .iter()
            .map(|slot| &slot.entry)
            .filter(|e| e.folder_code == folder_code && e.is_valid())
            .cloned()
            .collect();
        entries.sort_by(|a, b| locale_cmp(&a.word, &b.word));
        entries
    }

    /// フォルダ内の有効なエントリを保存順で取得
    pub fn valid_in_folder<'a>(
        &'a self,
        folder_code: &'a str,
    ) -> impl Iterator<Item = (EntryId, &'a VocabEntry)> + 'a {
        self.iter()
            .filter(move |(_, e)| e.folder_code == folder_code && e.is_valid())
    }

    pub fn count_by_folder(&self, folder_code: &str) -> usize {
        self.valid_in_folder(folder_code).count()
    }

    /// 3つのフィールドが完全一致するエントリが存在するか
    pub fn is_duplicate(&self, word: &str, meaning: &str, folder_code: &str) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.entry.matches(folder_code, word, meaning))
    }

    /// 一致するエントリをすべて削除し、削除件数を返す
    pub fn remove_matching(&mut self, folder_code: &str, word: &str, meaning: &str) -> usize {
        self.retain(|e| !e.matches(folder_code, word, meaning))
    }

    /// フォルダに属するエントリをすべて削除
    pub fn remove_folder(&mut self, folder_code: &str) -> usize {
        self.retain(|e| e.folder_code != folder_code)
    }

    /// 識別子で指定したエントリだけを削除
    pub fn remove_ids(&mut self, ids: &HashSet<EntryId>) -> usize {
        let before = self.slots.len();
        self.slots.retain(|slot| !ids.contains(&slot.id));
        before - self.slots.len()
    }

    fn retain(&mut self, keep: impl Fn(&VocabEntry) -> bool) -> usize {
        let before = self.slots.len();
        self.slots.retain(|slot| keep(&slot.entry));
        before - self.slots.len()
    }
}

/// ロケールを考慮した文字列比較
///
/// 比較は次の順で行う。
/// 1. アクセントと大文字小文字を除いた基本文字（`é` → `e`、`đ` → `d`）
/// 2. アクセント（アクセントなしが先）
/// 3. 大文字小文字（小文字が先）
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn base_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match c {
            // 分解できない字形は基本文字に寄せる
            'đ' | 'ð' => key.push('d'),
            'ø' => key.push('o'),
            'ł' => key.push('l'),
            'ħ' => key.push('h'),
            'ı' => key.push('i'),
            'ß' => key.push_str("ss"),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            'þ' => key.push_str("th"),
            other => key.push(other),
        }
    }
    key
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod tests;

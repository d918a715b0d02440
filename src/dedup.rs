//! 重複エントリの検出と削除
//!
//! 2段階で動作する。
//!
//! ```text
//!   scan(folder) ──▶ DuplicatePlan ──▶ (利用者が確認) ──▶ commit(&plan) ──▶ DedupOutcome
//! ```
//!
//! 計画は値として呼び出し側に返され、そのまま `commit` に渡される。
//! `commit` は最新の保存内容に対して計画の各メンバーを再検証し、
//! 変化していたメンバーは削除しない。

use crate::error::Result;
use crate::store::{KeyValueStore, StoreAccessor};
use crate::vocabulary::{EntryId, VocabCollection, VocabEntry, Vocabulary};
use std::collections::{HashMap, HashSet};

/// スキャン時点のエントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMember {
    pub id: EntryId,
    pub entry: VocabEntry,
}

/// 同じ (単語, 意味) を持つエントリのグループ（2件以上）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub word: String,
    pub meaning: String,
    /// 保存順。先頭が残すエントリ
    pub members: Vec<DuplicateMember>,
}

impl DuplicateGroup {
    /// 表示用キー `word|meaning`
    pub fn display_key(&self) -> String {
        format!("{}|{}", self.word, self.meaning)
    }

    pub fn keeper(&self) -> &DuplicateMember {
        &self.members[0]
    }

    pub fn surplus(&self) -> &[DuplicateMember] {
        &self.members[1..]
    }
}

/// 削除計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePlan {
    pub folder_code: String,
    /// 最初の出現順
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicatePlan {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 削除予定のエントリ数
    pub fn surplus_count(&self) -> usize {
        self.groups.iter().map(|g| g.surplus().len()).sum()
    }
}

/// 削除の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DedupOutcome {
    pub removed: usize,
    /// スキャン後に内容が変わっていたため削除しなかった件数
    pub stale: usize,
}

/// フォルダ内の重複グループを検出する（副作用なし）
///
/// 単語または意味が空のエントリは対象外。
pub fn find_duplicates(collection: &VocabCollection, folder_code: &str) -> DuplicatePlan {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for (id, entry) in collection.valid_in_folder(folder_code) {
        let key = (entry.word.as_str(), entry.meaning.as_str());
        let member = DuplicateMember {
            id,
            entry: entry.clone(),
        };
        match index.get(&key) {
            Some(&i) => groups[i].members.push(member),
            None => {
                index.insert(key, groups.len());
                groups.push(DuplicateGroup {
                    word: entry.word.clone(),
                    meaning: entry.meaning.clone(),
                    members: vec![member],
                });
            }
        }
    }

    groups.retain(|g| g.members.len() > 1);

    DuplicatePlan {
        folder_code: folder_code.to_string(),
        groups,
    }
}

/// 計画を現在のコレクションに照らして削除対象の識別子を決める
///
/// メンバーは、同じ識別子のスロットが同じ内容を保持している場合のみ有効。
/// 残すエントリが無効になったグループは丸ごと見送る。
pub fn resolve_removals(
    collection: &VocabCollection,
    plan: &DuplicatePlan,
) -> (HashSet<EntryId>, usize) {
    let is_live = |member: &DuplicateMember| collection.get(member.id) == Some(&member.entry);

    let mut removals = HashSet::new();
    let mut stale = 0;

    for group in &plan.groups {
        if !is_live(group.keeper()) {
            stale += group.surplus().len();
            continue;
        }
        for member in group.surplus() {
            if is_live(member) {
                removals.insert(member.id);
            } else {
                stale += 1;
            }
        }
    }

    (removals, stale)
}

/// ストアに対して重複の検出と削除を行う
pub struct DedupEngine<'a, S: KeyValueStore> {
    vocabulary: Vocabulary<'a, S>,
}

impl<'a, S: KeyValueStore> DedupEngine<'a, S> {
    pub fn new(store: &'a StoreAccessor<S>) -> Self {
        Self {
            vocabulary: Vocabulary::new(store),
        }
    }

    /// 重複グループを検出（重複がなければ空の計画）
    pub fn scan(&self, folder_code: &str) -> Result<DuplicatePlan> {
        let collection = self.vocabulary.load()?;
        let plan = find_duplicates(&collection, folder_code);
        tracing::debug!(
            folder = folder_code,
            groups = plan.groups.len(),
            surplus = plan.surplus_count(),
            "scanned for duplicates"
        );
        Ok(plan)
    }

    /// 計画に従って余剰エントリを削除（保存は最大1回）
    pub fn commit(&self, plan: &DuplicatePlan) -> Result<DedupOutcome> {
        let mut collection = self.vocabulary.load()?;
        let (removals, stale) = resolve_removals(&collection, plan);

        let removed = collection.remove_ids(&removals);
        if removed > 0 {
            self.vocabulary.save(&collection)?;
        }
        if stale > 0 {
            tracing::warn!(folder = %plan.folder_code, stale, "skipped entries changed since scan");
        }
        tracing::info!(folder = %plan.folder_code, removed, "removed duplicates");

        Ok(DedupOutcome { removed, stale })
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;

#[cfg(test)]
#[path = "dedup_proptests.rs"]
mod proptests;

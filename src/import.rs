//! インポートパイプライン
//!
//! 解析済みの文書を既存のコレクションにマージする。
//! アイテム単位の不備はバッチを中断せず、見送り件数として数える。

mod document;
mod report;

pub use document::parse_document;
pub use report::ImportReport;

use crate::error::{Result, VfmError};
use crate::folder::FolderRegistry;
use crate::store::{KeyValueStore, StoreAccessor};
use crate::vocabulary::{VocabEntry, Vocabulary};
use document::ImportItem;
use report::CreatedFolders;
use serde_json::Value;

/// 現在時刻（エポックミリ秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 語彙データのインポート
pub struct ImportPipeline<'a, S: KeyValueStore> {
    folders: FolderRegistry<'a, S>,
    vocabulary: Vocabulary<'a, S>,
    clock: fn() -> i64,
}

impl<'a, S: KeyValueStore> ImportPipeline<'a, S> {
    pub fn new(store: &'a StoreAccessor<S>) -> Self {
        Self::with_clock(store, now_millis)
    }

    /// 時刻取得を差し替えて作成（テスト用）
    pub fn with_clock(store: &'a StoreAccessor<S>, clock: fn() -> i64) -> Self {
        Self {
            folders: FolderRegistry::new(store),
            vocabulary: Vocabulary::new(store),
            clock,
        }
    }

    /// JSONテキストを解析してインポート
    ///
    /// 解析に失敗した場合はストアを一切変更しない。
    pub fn import_text(&self, text: &str, default_folder_code: &str) -> Result<ImportReport> {
        let items = parse_document(text)?;
        self.run(&items, default_folder_code)
    }

    /// アイテムを入力順に処理し、語彙コレクションを最後に1回だけ保存する
    pub fn run(&self, items: &[Value], default_folder_code: &str) -> Result<ImportReport> {
        if default_folder_code.is_empty() {
            return Err(VfmError::InvalidInput(
                "A default folder code is required for import".to_string(),
            ));
        }

        let now = (self.clock)();
        let mut collection = self.vocabulary.load()?;
        let mut created = CreatedFolders::default();
        let mut report = ImportReport::default();

        for value in items {
            let item = ImportItem::from_value(value);
            let target = item
                .folder_code
                .clone()
                .unwrap_or_else(|| default_folder_code.to_string());

            if self.folders.ensure_folder(&target)? {
                created.insert(&target);
            }

            let (Some(word), Some(meaning)) = (item.word, item.meaning) else {
                report.skipped += 1;
                continue;
            };
            if collection.is_duplicate(&word, &meaning, &target) {
                report.skipped += 1;
                continue;
            }

            collection.push(VocabEntry {
                folder_code: target,
                word,
                pronunciation: item.pronunciation.unwrap_or_default(),
                meaning,
                level: item.level.unwrap_or(0),
                last_review_time: item.last_review_time.unwrap_or(now),
                next_review_time: item.next_review_time.unwrap_or(now),
            });
            report.imported += 1;
        }

        self.vocabulary.save(&collection)?;

        report.created_folders = created.into_vec();
        tracing::info!(
            imported = report.imported,
            skipped = report.skipped,
            created_folders = report.created_folders.len(),
            "import finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;

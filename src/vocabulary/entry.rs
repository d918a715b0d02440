use crate::store::lenient;
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// 1日のミリ秒数
const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// 未学習エントリの表示ラベル
pub const NEVER_REVIEWED: &str = "never";

/// 語彙エントリ
///
/// 永続化形式ではフィールド名を1〜2文字に短縮する。
/// 型の合わない保存値は既定値として読み込まれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// 所属フォルダのコード
    #[serde(rename = "s", default, deserialize_with = "lenient::string")]
    pub folder_code: String,
    #[serde(rename = "w", default, deserialize_with = "lenient::string")]
    pub word: String,
    #[serde(rename = "p", default, deserialize_with = "lenient::string")]
    pub pronunciation: String,
    #[serde(rename = "m", default, deserialize_with = "lenient::string")]
    pub meaning: String,
    #[serde(rename = "l", default, deserialize_with = "lenient::level")]
    pub level: u32,
    /// 最終復習時刻（エポックミリ秒、0は未学習）
    #[serde(rename = "lt", default, deserialize_with = "lenient::millis")]
    pub last_review_time: i64,
    /// 次回復習時刻（エポックミリ秒）
    #[serde(rename = "nt", default, deserialize_with = "lenient::millis")]
    pub next_review_time: i64,
}

impl VocabEntry {
    /// 任意フィールドを既定値にしたエントリを作成
    pub fn new(
        folder_code: impl Into<String>,
        word: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            folder_code: folder_code.into(),
            word: word.into(),
            pronunciation: String::new(),
            meaning: meaning.into(),
            level: 0,
            last_review_time: 0,
            next_review_time: 0,
        }
    }

    /// 表示・重複検出の対象になるか（単語と意味が空でない）
    pub fn is_valid(&self) -> bool {
        !self.word.is_empty() && !self.meaning.is_empty()
    }

    /// (フォルダ, 単語, 意味) が完全一致するか
    pub fn matches(&self, folder_code: &str, word: &str, meaning: &str) -> bool {
        self.folder_code == folder_code && self.word == word && self.meaning == meaning
    }

    /// 次回復習までの日数（切り上げ、過ぎていれば0以下）
    pub fn days_until_next_review(&self, now_millis: i64) -> i64 {
        let diff = self.next_review_time - now_millis;
        (diff as f64 / DAY_MILLIS as f64).ceil() as i64
    }

    /// 最終復習時刻の表示用ラベル（ローカル時刻 `dd/mm HH:MM`）
    pub fn last_review_label(&self) -> String {
        if self.last_review_time <= 0 {
            return NEVER_REVIEWED.to_string();
        }
        match Local.timestamp_millis_opt(self.last_review_time).single() {
            Some(time) => time.format("%d/%m %H:%M").to_string(),
            None => NEVER_REVIEWED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let entry = VocabEntry::new("A", "cat", "mèo");
        assert_eq!(entry.pronunciation, "");
        assert_eq!(entry.level, 0);
        assert_eq!(entry.last_review_time, 0);
        assert!(entry.is_valid());
    }

    #[test]
    fn empty_word_or_meaning_is_invalid() {
        assert!(!VocabEntry::new("A", "", "mèo").is_valid());
        assert!(!VocabEntry::new("A", "cat", "").is_valid());
    }

    #[test]
    fn matches_is_exact_and_case_sensitive() {
        let entry = VocabEntry::new("A", "Cat", "mèo");
        assert!(entry.matches("A", "Cat", "mèo"));
        assert!(!entry.matches("A", "cat", "mèo"));
        assert!(!entry.matches("B", "Cat", "mèo"));
        assert!(!entry.matches("A", "Cat", "meo"));
    }

    #[test]
    fn days_until_next_review_rounds_up() {
        let mut entry = VocabEntry::new("A", "w", "m");
        entry.next_review_time = DAY_MILLIS + 1;
        assert_eq!(entry.days_until_next_review(0), 2);

        entry.next_review_time = DAY_MILLIS;
        assert_eq!(entry.days_until_next_review(0), 1);
    }

    #[test]
    fn days_until_next_review_is_non_positive_when_overdue() {
        let mut entry = VocabEntry::new("A", "w", "m");
        entry.next_review_time = 0;
        assert_eq!(entry.days_until_next_review(DAY_MILLIS * 3), -3);
    }

    #[test]
    fn last_review_label_for_unreviewed_entry() {
        let entry = VocabEntry::new("A", "w", "m");
        assert_eq!(entry.last_review_label(), NEVER_REVIEWED);
    }

    #[test]
    fn last_review_label_formats_day_month_time() {
        let mut entry = VocabEntry::new("A", "w", "m");
        entry.last_review_time = 1_700_000_000_000;
        let label = entry.last_review_label();
        assert_eq!(label.len(), "dd/mm HH:MM".len());
        assert_eq!(&label[2..3], "/");
        assert_eq!(&label[8..9], ":");
    }
}

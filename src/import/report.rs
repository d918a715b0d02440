use std::collections::HashSet;

/// インポート結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// 重複または不正で見送った件数
    pub skipped: usize,
    /// 新規作成したフォルダ（作成順、重複なし）
    pub created_folders: Vec<String>,
}

impl ImportReport {
    /// 利用者向けの要約メッセージ
    pub fn message(&self) -> String {
        let mut message = format!("Imported {} vocabulary entries.", self.imported);
        if self.skipped > 0 {
            message.push_str(&format!(
                "\n{} duplicate or invalid entries skipped.",
                self.skipped
            ));
        }
        if !self.created_folders.is_empty() {
            message.push_str(&format!(
                "\nCreated {} new folder(s): {}",
                self.created_folders.len(),
                self.created_folders.join(", ")
            ));
        }
        message
    }
}

/// 作成順を保つフォルダコードの集合
#[derive(Debug, Default)]
pub(super) struct CreatedFolders {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl CreatedFolders {
    pub fn insert(&mut self, code: &str) {
        if self.seen.insert(code.to_string()) {
            self.ordered.push(code.to_string());
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

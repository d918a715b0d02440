//! フォルダのエクスポート
//!
//! 出力はインポート文書と同じ形式なので、そのまま再インポートできる。

use crate::error::{Result, VfmError};
use crate::folder::FolderRegistry;
use crate::store::{KeyValueStore, StoreAccessor};
use crate::vocabulary::{VocabEntry, Vocabulary};

/// フォルダ内の有効なエントリを保存順で取得
pub fn export_folder<S: KeyValueStore>(
    store: &StoreAccessor<S>,
    folder_code: &str,
) -> Result<Vec<VocabEntry>> {
    if FolderRegistry::new(store).get(folder_code)?.is_none() {
        return Err(VfmError::FolderNotFound(folder_code.to_string()));
    }

    let collection = Vocabulary::new(store).load()?;
    Ok(collection
        .valid_in_folder(folder_code)
        .map(|(_, entry)| entry.clone())
        .collect())
}

/// エクスポート用JSON
pub fn to_json(entries: &[VocabEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

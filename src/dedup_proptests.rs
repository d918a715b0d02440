use super::*;
use proptest::prelude::*;

/// 少数の単語・意味から組み立てたエントリ（重複が起きやすい）
fn entry_strategy() -> impl Strategy<Value = VocabEntry> {
    (
        prop::sample::select(vec!["A", "B"]),
        prop::sample::select(vec!["cat", "Cat", "dog", "ant", "école", "egg", "đi", ""]),
        prop::sample::select(vec!["mèo", "chó", "kiến"]),
        0u32..4,
    )
        .prop_map(|(folder, word, meaning, level)| {
            let mut entry = VocabEntry::new(folder, word, meaning);
            entry.level = level;
            entry
        })
}

fn collection_strategy() -> impl Strategy<Value = Vec<VocabEntry>> {
    prop::collection::vec(entry_strategy(), 0..24)
}

proptest! {
    /// 削除後に再スキャンすると重複は残っていない
    #[test]
    fn prop_scan_after_commit_is_empty(entries in collection_strategy()) {
        let mut collection = VocabCollection::from_entries(entries);
        let plan = find_duplicates(&collection, "A");
        let (removals, _) = resolve_removals(&collection, &plan);
        collection.remove_ids(&removals);

        prop_assert!(find_duplicates(&collection, "A").is_empty());
    }

    /// 各キーについて最も早く挿入されたエントリがちょうど1件残る
    #[test]
    fn prop_commit_retains_earliest_member(entries in collection_strategy()) {
        let mut collection = VocabCollection::from_entries(entries);
        let plan = find_duplicates(&collection, "A");
        let (removals, stale) = resolve_removals(&collection, &plan);
        prop_assert_eq!(stale, 0);
        prop_assert_eq!(removals.len(), plan.surplus_count());

        collection.remove_ids(&removals);

        for group in &plan.groups {
            let survivors: Vec<EntryId> = collection
                .valid_in_folder("A")
                .filter(|(_, e)| e.word == group.word && e.meaning == group.meaning)
                .map(|(id, _)| id)
                .collect();
            prop_assert_eq!(survivors, vec![group.keeper().id]);
        }
    }

    /// 一覧は単語順に並び、同じ単語は元の順序を保つ
    #[test]
    fn prop_list_by_folder_is_sorted_and_stable(entries in collection_strategy()) {
        let collection = VocabCollection::from_entries(entries.clone());
        let listed = collection.list_by_folder("A");

        prop_assert!(listed.iter().all(|e| e.is_valid() && e.folder_code == "A"));
        for pair in listed.windows(2) {
            prop_assert!(crate::vocabulary::locale_cmp(&pair[0].word, &pair[1].word).is_le());
        }

        // アクセント付きの単語は基本文字の位置に並ぶ
        let first = |word: &str| listed.iter().position(|e| e.word == word);
        let last = |word: &str| listed.iter().rposition(|e| e.word == word);
        for (before, after) in [("école", "egg"), ("đi", "dog"), ("dog", "école")] {
            if let (Some(b), Some(a)) = (last(before), first(after)) {
                prop_assert!(b < a, "{} should sort before {}", before, after);
            }
        }

        // 同じ単語のエントリは保存順のまま
        let original: Vec<&VocabEntry> = entries
            .iter()
            .filter(|e| e.folder_code == "A" && e.is_valid())
            .collect();
        for word in ["cat", "Cat", "dog", "ant", "école", "egg", "đi"] {
            let in_list: Vec<&VocabEntry> = listed.iter().filter(|e| e.word == word).collect();
            let in_store: Vec<&VocabEntry> =
                original.iter().copied().filter(|e| e.word == word).collect();
            prop_assert_eq!(in_list, in_store);
        }
    }
}

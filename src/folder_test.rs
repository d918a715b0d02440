//! FolderRegistry のユニットテスト

use super::*;
use crate::store::memory::{accessor_with, MemoryStore};

fn codes(folders: &[Folder]) -> Vec<&str> {
    folders.iter().map(|f| f.code.as_str()).collect()
}

mod ensure_folder_tests {
    use super::*;

    #[test]
    fn creates_missing_folder_with_empty_name() {
        let store = StoreAccessor::new(MemoryStore::new());
        let registry = FolderRegistry::new(&store);

        assert!(registry.ensure_folder("N5").unwrap());

        let folders = registry.list().unwrap();
        assert_eq!(folders, vec![Folder::new("N5", "")]);
    }

    #[test]
    fn second_call_is_a_no_op() {
        let store = StoreAccessor::new(MemoryStore::new());
        let registry = FolderRegistry::new(&store);

        assert!(registry.ensure_folder("N5").unwrap());
        assert!(!registry.ensure_folder("N5").unwrap());

        assert_eq!(codes(&registry.list().unwrap()), vec!["N5"]);
        assert_eq!(store.inner().write_count(), 1);
    }

    #[test]
    fn existing_folder_keeps_its_name() {
        let store = accessor_with(r#"[{"code":"A","name":"Animals"}]"#, "[]");
        let registry = FolderRegistry::new(&store);

        assert!(!registry.ensure_folder("A").unwrap());
        assert_eq!(registry.get("A").unwrap().unwrap().name, "Animals");
    }
}

mod create_and_rename_tests {
    use super::*;

    #[test]
    fn create_trims_code() {
        let store = StoreAccessor::new(MemoryStore::new());
        let registry = FolderRegistry::new(&store);

        let folder = registry.create("  A  ", "Animals").unwrap();

        assert_eq!(folder.code, "A");
        assert_eq!(registry.get("A").unwrap().unwrap().name, "Animals");
    }

    #[test]
    fn create_rejects_empty_code() {
        let store = StoreAccessor::new(MemoryStore::new());

        let err = FolderRegistry::new(&store).create("   ", "").unwrap_err();

        assert!(matches!(err, VfmError::InvalidInput(_)));
    }

    #[test]
    fn create_rejects_existing_code() {
        let store = accessor_with(r#"[{"code":"A","name":""}]"#, "[]");

        let err = FolderRegistry::new(&store).create("A", "again").unwrap_err();

        assert!(matches!(err, VfmError::FolderExists(code) if code == "A"));
    }

    #[test]
    fn rename_updates_name() {
        let store = accessor_with(r#"[{"code":"A","name":""}]"#, "[]");
        let registry = FolderRegistry::new(&store);

        registry.rename("A", "Animals").unwrap();

        assert_eq!(registry.get("A").unwrap().unwrap().label(), "A - Animals");
    }

    #[test]
    fn rename_missing_folder_is_not_found() {
        let store = StoreAccessor::new(MemoryStore::new());

        let err = FolderRegistry::new(&store).rename("X", "y").unwrap_err();

        assert!(matches!(err, VfmError::FolderNotFound(_)));
    }
}

mod delete_folder_tests {
    use super::*;

    #[test]
    fn cascades_to_entries_of_that_folder() {
        let store = accessor_with(
            r#"[{"code":"A","name":""},{"code":"B","name":""}]"#,
            r#"[{"s":"A","w":"dog","m":"chó"},{"s":"B","w":"cat","m":"mèo"},{"s":"A","w":"","m":"x"}]"#,
        );
        let registry = FolderRegistry::new(&store);

        let deletion = registry.delete_folder("A").unwrap();

        assert_eq!(deletion.folder.code, "A");
        assert_eq!(deletion.removed_entries, 2);
        assert_eq!(codes(&registry.list().unwrap()), vec!["B"]);
        let remaining = store.vocabularies().unwrap();
        assert!(remaining.iter().all(|e| e.folder_code != "A"));
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn writes_both_collections_at_once() {
        let store = accessor_with(
            r#"[{"code":"A","name":""}]"#,
            r#"[{"s":"A","w":"dog","m":"chó"}]"#,
        );

        FolderRegistry::new(&store).delete_folder("A").unwrap();

        assert_eq!(store.inner().write_count(), 1);
    }

    #[test]
    fn empty_folder_can_be_deleted() {
        let store = accessor_with(r#"[{"code":"A","name":""}]"#, "[]");

        let deletion = FolderRegistry::new(&store).delete_folder("A").unwrap();

        assert_eq!(deletion.removed_entries, 0);
    }

    #[test]
    fn missing_folder_is_not_found_and_nothing_changes() {
        let store = accessor_with("[]", r#"[{"s":"A","w":"dog","m":"chó"}]"#);

        let err = FolderRegistry::new(&store).delete_folder("A").unwrap_err();

        assert!(matches!(err, VfmError::FolderNotFound(code) if code == "A"));
        assert_eq!(store.inner().write_count(), 0);
        assert_eq!(store.vocabularies().unwrap().len(), 1);
    }
}

use super::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn explicit_data_dir_wins() {
    let temp_dir = TempDir::new().unwrap();

    let config = Config::load(Some(temp_dir.path().to_path_buf())).unwrap();

    assert_eq!(config.data_dir, temp_dir.path());
    assert!(config.default_folder.is_none());
}

#[test]
#[serial]
fn env_var_sets_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var(DATA_DIR_ENV, temp_dir.path());

    let config = Config::load(None).unwrap();
    std::env::remove_var(DATA_DIR_ENV);

    assert_eq!(config.data_dir, temp_dir.path());
}

#[test]
#[serial]
fn empty_env_var_falls_back_to_home() {
    let temp_dir = TempDir::new().unwrap();
    let original_home = std::env::var("HOME").ok();
    std::env::set_var(DATA_DIR_ENV, "");
    std::env::set_var("HOME", temp_dir.path());

    let config = Config::load(None);

    std::env::remove_var(DATA_DIR_ENV);
    match original_home {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }
    assert_eq!(config.unwrap().data_dir, temp_dir.path().join(".vfm"));
}

#[test]
fn config_file_provides_default_folder() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "default_folder = \"N5\"\n",
    )
    .unwrap();

    let config = Config::load_from(temp_dir.path().to_path_buf()).unwrap();

    assert_eq!(config.default_folder.as_deref(), Some("N5"));
    assert_eq!(config.resolve_folder(None).unwrap(), "N5");
    assert_eq!(config.resolve_folder(Some("N4".to_string())).unwrap(), "N4");
}

#[test]
fn malformed_config_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "default_folder = [").unwrap();

    let err = Config::load_from(temp_dir.path().to_path_buf()).unwrap_err();

    assert!(matches!(err, VfmError::Config(_)));
}

#[test]
fn unknown_config_key_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "colour = true\n").unwrap();

    assert!(Config::load_from(temp_dir.path().to_path_buf()).is_err());
}

#[test]
fn resolve_folder_without_default_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(temp_dir.path().to_path_buf()).unwrap();

    let err = config.resolve_folder(None).unwrap_err();

    assert!(matches!(err, VfmError::InvalidInput(_)));
}

#[test]
fn open_store_reads_from_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("folders.json"),
        r#"[{"code":"A","name":"Animals"}]"#,
    )
    .unwrap();
    let config = Config::load_from(temp_dir.path().to_path_buf()).unwrap();

    let folders = config.open_store().folders().unwrap();

    assert_eq!(folders[0].name, "Animals");
}

//! Integration tests for ConfigStore and the bundled templates
//!
//! These tests verify:
//! - Loading hand-written YAML documents
//! - Save/load of generated templates
//! - Search path resolution
//! - Error kinds for missing and malformed files

use camino::Utf8PathBuf;
use gopaper::config::templates::{basic_template, full_template};
use gopaper::config::{ConfigError, ConfigStore, template};
use gopaper::{DisplayMode, LogLevel, OutputTarget};
use std::fs;
use tempfile::TempDir;

fn create_test_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, root)
}

#[test]
fn test_load_hand_written_config() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("gopaper.yaml");
    fs::write(
        &path,
        r#"
configuration:
  output: both
  log-file: /var/log/gopaper.log
  log-level: debug
  show-caller: true
categories:
  - name: Landscapes
    source: /walls/landscapes
    mode: fit
    enabled: true
  - name: Panoramas
    source: /walls/panoramas
    mode: span
  - name: Patterns
    source: /walls/patterns
    mode: mosaic
    enabled: true
"#,
    )
    .unwrap();

    let document = ConfigStore::at(&path).load().unwrap();

    assert_eq!(document.configuration.output, OutputTarget::Both);
    assert_eq!(
        document.configuration.log_file.as_deref(),
        Some(camino::Utf8Path::new("/var/log/gopaper.log"))
    );
    assert_eq!(document.configuration.log_level, LogLevel::Debug);
    assert!(document.configuration.show_caller);

    assert_eq!(document.categories.len(), 3);
    assert_eq!(document.categories[0].name, "Landscapes");
    assert_eq!(document.categories[0].mode, DisplayMode::Fit);
    assert!(document.categories[0].enabled);

    // Missing `enabled` means disabled
    assert!(!document.categories[1].enabled);
    assert_eq!(document.categories[1].mode, DisplayMode::Span);

    // Unknown mode falls back to crop
    assert_eq!(document.categories[2].mode, DisplayMode::Crop);
}

#[test]
fn test_missing_configuration_section_uses_defaults() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("gopaper.yaml");
    fs::write(
        &path,
        "categories:\n  - name: Only\n    source: /walls/only\n    enabled: true\n",
    )
    .unwrap();

    let document = ConfigStore::at(&path).load().unwrap();

    assert_eq!(document.configuration.output, OutputTarget::Console);
    assert_eq!(document.configuration.log_level, LogLevel::Info);
    assert!(document.configuration.log_file.is_none());
    assert!(!document.configuration.show_caller);
    assert_eq!(document.categories[0].mode, DisplayMode::Crop);
}

#[test]
fn test_legacy_value_spellings() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("gopaper.yaml");
    fs::write(
        &path,
        "configuration:\n  output: log\n  log-level: warning\ncategories: []\n",
    )
    .unwrap();

    let document = ConfigStore::at(&path).load().unwrap();

    assert_eq!(document.configuration.output, OutputTarget::File);
    assert_eq!(document.configuration.log_level, LogLevel::Warn);
}

#[test]
fn test_templates_survive_save_and_load() {
    let (_temp_dir, root) = create_test_dir();

    for (name, document) in [("basic", basic_template()), ("full", full_template())] {
        let store = ConfigStore::at(root.join(name).join("gopaper.yaml"));
        store.save(&document).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, document, "template '{name}' changed on disk");
    }
}

#[test]
fn test_template_lookup() {
    assert_eq!(template("basic"), Some(basic_template()));
    assert_eq!(template("FULL"), Some(full_template()));
    assert!(template("fancy").is_none());

    let full = full_template();
    assert_eq!(full.configuration.output, OutputTarget::Both);
    assert!(full.configuration.log_file.is_some());
    assert_eq!(full.categories.iter().filter(|c| c.enabled).count(), 1);
}

#[test]
fn test_locate_prefers_root_over_conf_dir() {
    let (_temp_dir, root) = create_test_dir();
    let conf = root.join("conf");
    fs::create_dir_all(&conf).unwrap();
    fs::write(conf.join("gopaper.yaml"), "categories: []\n").unwrap();

    let store = ConfigStore::locate(None, &root).unwrap();
    assert_eq!(store.path(), conf.join("gopaper.yaml").as_path());

    fs::write(root.join("gopaper.yaml"), "categories: []\n").unwrap();
    let store = ConfigStore::locate(None, &root).unwrap();
    assert_eq!(store.path(), root.join("gopaper.yaml").as_path());
}

#[test]
fn test_locate_reports_searched_paths() {
    let (_temp_dir, root) = create_test_dir();

    let err = ConfigStore::locate(None, &root).unwrap_err();
    assert!(err.is_not_found());

    let message = err.to_string();
    assert!(message.contains(root.join("gopaper.yaml").as_str()));
    assert!(message.contains("gopaper init"));
}

#[test]
fn test_explicit_path_must_exist() {
    let (_temp_dir, root) = create_test_dir();
    let missing = root.join("elsewhere.yaml");

    let err = ConfigStore::locate(Some(missing.as_path()), &root).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(ref p) if *p == missing));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("gopaper.yaml");
    fs::write(&path, "categories: [\n  - name: broken\n").unwrap();

    let err = ConfigStore::at(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn test_unknown_output_is_parse_error() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("gopaper.yaml");
    fs::write(&path, "configuration:\n  output: printer\n").unwrap();

    let err = ConfigStore::at(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_empty_log_file_and_sourceless_category_load() {
    let (_temp_dir, root) = create_test_dir();
    let path = root.join("gopaper.yaml");
    fs::write(
        &path,
        r#"
configuration:
  output: file
  log-file: ""
  log-level: info
categories:
  - name: Unfinished
    enabled: false
  - name: Ready
    source: /walls/ready
    enabled: true
"#,
    )
    .unwrap();

    let document = ConfigStore::at(&path).load().unwrap();

    assert!(document.configuration.log_file.is_none());
    assert_eq!(document.categories.len(), 2);
    assert_eq!(document.categories[0].source.as_str(), "");
    assert_eq!(document.categories[1].source.as_str(), "/walls/ready");
}

//! Content and configuration loading tests
//!
//! Exercises the files the binary reads at startup: the site content JSON
//! given with `--content` and the settings file given with `--config`.

use folio::content::SiteContent;
use folio::ui::config::{Config, ContactFormMode};
use folio::ui::theme::Theme;
use folio::ui::App;
use std::fs;
use tempfile::TempDir;

/// Test that the bundled content round-trips through a file on disk
#[tokio::test]
async fn test_content_loads_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("site.json");
    let bundled = SiteContent::bundled().unwrap();
    fs::write(&path, serde_json::to_string_pretty(&bundled).unwrap()).unwrap();

    let loaded = SiteContent::load_from(&path).unwrap();
    assert_eq!(loaded.owner.first_name, bundled.owner.first_name);
    assert_eq!(loaded.portfolio.len(), bundled.portfolio.len());
}

/// Test that a missing content file names the path in the error
#[tokio::test]
async fn test_content_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let err = SiteContent::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}

/// Test that content whose case studies reference an unknown filter is rejected
#[tokio::test]
async fn test_content_with_unknown_category_is_rejected() {
    let mut content = SiteContent::bundled().unwrap();
    content.portfolio[0].category = "Radio Ads".to_string();
    let json = serde_json::to_string(&content).unwrap();

    let err = SiteContent::parse(&json).unwrap_err();
    assert!(format!("{err:#}").contains("Radio Ads"));
}

/// Test that content without roles is rejected before the typewriter sees it
#[tokio::test]
async fn test_content_without_roles_is_rejected() {
    let mut content = SiteContent::bundled().unwrap();
    content.roles.clear();
    let json = serde_json::to_string(&content).unwrap();

    assert!(SiteContent::parse(&json).is_err());
}

/// Test that a hand-written config file drives the app
#[tokio::test]
async fn test_config_file_drives_app() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "theme": "Violet Day",
            "launch_browser": false,
            "contact_form": "redirect",
            "animation": { "typing_speed_ms": 10 }
        }"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.contact_form, ContactFormMode::Redirect);
    assert!(!config.launch_browser);
    assert_eq!(config.animation.typing_pause_ms, 2000);

    let theme = Theme::by_name(&config.theme).unwrap();
    let mut app = App::new(SiteContent::bundled().unwrap(), config, theme);
    app.tick(std::time::Duration::from_millis(30));
    assert_eq!(app.typewriter.display(), "Cop");
    assert_eq!(app.theme.name, "Violet Day");
}

/// Test that unknown keys are reported instead of silently ignored
#[tokio::test]
async fn test_config_unknown_key_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "animation": { "typing_sped_ms": 10 } }"#).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}

/// Test that saving creates missing parent directories
#[tokio::test]
async fn test_config_save_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("folio").join("config.json");
    let config = Config {
        theme: "Violet Day".to_string(),
        ..Config::default()
    };

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.theme, "Violet Day");
}

//! Settings loading tests

use std::path::PathBuf;

use tui_bricks::config::{ConfigError, Settings};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tui-bricks-{}-{}.json", name, std::process::id()))
}

#[test]
fn missing_file_yields_defaults() {
    let path = scratch_path("missing");
    let _ = std::fs::remove_file(&path);

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.view.cell_width, 2);
    assert_eq!(settings.view.cell_height, 1);
}

#[test]
fn file_values_are_loaded() {
    let path = scratch_path("full");
    std::fs::write(
        &path,
        r#"{ "seed": 42, "audio": { "volume": 0.25, "muted": true }, "view": { "cell_width": 3, "cell_height": 2 } }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.audio.volume, 0.25);
    assert!(settings.audio.muted);
    assert_eq!((settings.view.cell_width, settings.view.cell_height), (3, 2));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = scratch_path("broken");
    std::fs::write(&path, "{ \"seed\": ").unwrap();

    let err = Settings::load(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn wrong_types_are_rejected() {
    assert!(Settings::from_json_str(r#"{ "seed": "abc" }"#).is_err());
}

#[test]
fn settings_roundtrip_through_json() {
    let mut settings = Settings::default();
    settings.seed = Some(7);
    settings.audio.muted = true;

    let text = settings.to_json_string().unwrap();
    assert_eq!(Settings::from_json_str(&text).unwrap(), settings);
}

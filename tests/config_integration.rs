use miller_columns::config::Config;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[columns]
exclusion_patterns = """
archive
.trash
"""
hover_delay_ms = 750
icon_dir = "_data/icons"

[icons]
"Projects/Rust" = "ferris.png"

[emoji]
"Projects" = "🚀"
"Inbox/today.md" = "📌"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.hover_delay(), Duration::from_millis(750));
    assert_eq!(config.columns.icon_dir, "_data/icons");
    assert_eq!(config.icons.get("Projects/Rust").map(String::as_str), Some("ferris.png"));
    assert_eq!(config.emoji.len(), 2);
    assert!(config.exclusion_patterns().is_excluded("Old/ARCHIVE/x.md"));
    assert!(config.exclusion_patterns().is_excluded(".trash/y.md"));
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[emoji]
"Inbox" = "📥"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert_eq!(config.emoji.get("Inbox").map(String::as_str), Some("📥"));
    // Default values
    assert_eq!(config.columns.hover_delay_ms, 1000);
    assert_eq!(config.columns.icon_dir, ".miller-columns/icons");
    assert!(config.exclusion_patterns().is_empty());
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_invalid_delay_returns_error() {
    let config_content = r#"
[columns]
hover_delay_ms = 0
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn missing_explicit_file_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/miller.toml")));
    assert!(result.is_err());
}

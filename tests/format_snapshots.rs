//! Snapshot tests for column text output.
//!
//! Any visual change requires explicit approval with `cargo insta review`.

use insta::assert_snapshot;
use miller_columns::column::{format_column, Column, FormatOptions};
use miller_columns::{Config, MemoryVault};

fn inbox() -> Column {
    let vault = MemoryVault::new()
        .with_folder("Inbox/Later")
        .with_document("Inbox/today.md", 1000)
        .with_heading("Inbox/today.md", "Today")
        .with_document("Inbox/photo.JPG", 3000)
        .with_document("Inbox/Sketch.excalidraw.md", 100);

    let mut config = Config::default();
    config.emoji.insert("Inbox/Later".into(), "⏳".into());

    Column::render(&vault, &config, "Inbox", 0)
}

#[test]
fn test_column_snapshot() {
    let output = format_column(&inbox(), &FormatOptions::default());
    assert_snapshot!(output.trim_end(), @r"
    == Inbox [0]
      ⏳ Later ›
      🖼 photo
      ✏ Sketch
      📄 Today
    -- 1 folder | 3 files | 4.0 KB
    ");
}

#[test]
fn test_column_ascii_snapshot() {
    let mut column = inbox();
    column.set_active(Some("Inbox/today.md"));

    let output = format_column(&column, &FormatOptions::new().with_ascii(true));
    assert_snapshot!(output.trim_end(), @r"
    == Inbox [0]
      ⏳ Later >
      [image-file] photo
      [lucide-pencil] Sketch
    > [document] Today
    -- 1 folder | 3 files | 4.0 KB
    ");
}

#[test]
fn test_error_column_snapshot() {
    let column = Column::render(&MemoryVault::new(), &Config::default(), "Missing", 3);
    let output = format_column(&column, &FormatOptions::default());
    assert_snapshot!(output.trim_end(), @r"
    == Missing [3]
    !! Not a folder: Missing
    ");
}

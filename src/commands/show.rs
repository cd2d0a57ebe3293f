//! Show command implementation

use crate::cli::ShowArgs;
use crate::column::{format_column, format_json, Column, FormatOptions};
use crate::config::Config;
use crate::error::Result;
use crate::vault::{normalize_path, FsVault, ROOT};

/// Folder paths a column browser has open to reach `path`, root first.
pub fn trail_paths(path: &str) -> Vec<String> {
    let path = normalize_path(path);
    let mut trail = vec![ROOT.to_string()];
    if path == ROOT {
        return trail;
    }

    let mut current = String::new();
    for part in path.split('/') {
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(part);
        trail.push(current.clone());
    }
    trail
}

/// Render the requested columns, marking along a trail the item that leads
/// to the next column.
pub fn render_columns(vault: &FsVault, config: &Config, args: &ShowArgs) -> Vec<Column> {
    let paths = if args.trail {
        trail_paths(&args.path)
    } else {
        vec![normalize_path(&args.path)]
    };

    let mut columns: Vec<Column> = paths
        .iter()
        .enumerate()
        .map(|(depth, path)| Column::render(vault, config, path, depth))
        .collect();

    for (column, next) in columns.iter_mut().zip(paths.iter().skip(1)) {
        column.set_active(Some(next.as_str()));
    }

    columns
}

/// Run the show command
pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    let vault = FsVault::new(&args.root)?;
    tracing::info!(root = %vault.root().display(), path = %args.path, "Rendering columns");

    let columns = render_columns(&vault, config, &args);

    if args.json {
        let output = match columns.as_slice() {
            [column] if !args.trail => format_json(column, true)?,
            _ => serde_json::to_string_pretty(&columns)?,
        };
        println!("{}", output);
        return Ok(());
    }

    let options = FormatOptions::new()
        .with_ascii(args.ascii)
        .with_paths(args.paths);
    let output = columns
        .iter()
        .map(|column| format_column(column, &options))
        .collect::<Vec<_>>()
        .join("\n");
    print!("{}", output);

    Ok(())
}

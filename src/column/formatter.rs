use super::presentation::Icon;
use super::render::Column;
use crate::error::Result;

/// Format options for column text output
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Icon-set names in brackets instead of symbols
    pub ascii: bool,
    /// Append each item's vault path
    pub show_paths: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ascii(mut self, enabled: bool) -> Self {
        self.ascii = enabled;
        self
    }

    pub fn with_paths(mut self, show: bool) -> Self {
        self.show_paths = show;
        self
    }
}

fn icon_text(icon: &Icon, ascii: bool) -> String {
    match icon {
        Icon::Custom { .. } if ascii => "[custom]".to_string(),
        Icon::Custom { .. } => "◆".to_string(),
        Icon::Emoji { text } => text.clone(),
        Icon::Glyph { glyph } if ascii => format!("[{}]", glyph.name()),
        Icon::Glyph { glyph } => glyph.symbol().to_string(),
    }
}

/// Format a column as text: a header line, one line per item, then the
/// stats line (or the inline error message).
pub fn format_column(column: &Column, options: &FormatOptions) -> String {
    let mut output = format!("== {} [{}]\n", column.path, column.depth);

    if let Some(message) = &column.content.message {
        output.push_str(&format!("!! {}\n", message));
        return output;
    }

    for item in column.items() {
        let marker = if item.active { ">" } else { " " };
        let arrow = match (item.has_arrow, options.ascii) {
            (true, true) => " >",
            (true, false) => " ›",
            _ => "",
        };
        let path = if options.show_paths {
            format!("  ({})", item.path)
        } else {
            String::new()
        };

        output.push_str(&format!(
            "{} {} {}{}{}\n",
            marker,
            icon_text(&item.icon, options.ascii),
            item.label,
            arrow,
            path
        ));
    }

    if !column.stats_line.is_empty() {
        output.push_str(&format!("-- {}\n", column.stats_line));
    }

    output
}

/// Format a column as JSON
pub fn format_json(column: &Column, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(column)?
    } else {
        serde_json::to_string(column)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::vault::MemoryVault;

    fn column() -> Column {
        let vault = MemoryVault::new()
            .with_folder("n/Archive")
            .with_document("n/plan.md", 2048)
            .with_heading("n/plan.md", "Release plan");
        Column::render(&vault, &Config::default(), "n", 1)
    }

    #[test]
    fn test_format_column_ascii() {
        let output = format_column(&column(), &FormatOptions::new().with_ascii(true));
        assert!(output.starts_with("== n [1]\n"));
        assert!(output.contains("[folder] Archive >"));
        assert!(output.contains("[document] Release plan"));
        assert!(output.contains("-- 1 folder | 1 file | 2.0 KB"));
    }

    #[test]
    fn test_format_column_marks_active() {
        let mut column = column();
        column.set_active(Some("n/Archive"));
        let output = format_column(&column, &FormatOptions::default());
        assert!(output.contains("> 📁 Archive ›"));
    }

    #[test]
    fn test_format_column_paths() {
        let output = format_column(&column(), &FormatOptions::new().with_paths(true));
        assert!(output.contains("(n/plan.md)"));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&column(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["path"], "n");
        assert_eq!(value["content"]["items"][1]["label"], "Release plan");
        assert_eq!(value["stats"]["total_size"], 2048);
    }
}

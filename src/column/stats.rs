use serde::Serialize;

/// Aggregate numbers shown under a column.
///
/// `total_size` and `hidden_count` cover every document in the folder,
/// excluded ones included; the two counts cover only what is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnStats {
    pub folder_count: usize,
    pub file_count: usize,
    pub hidden_count: usize,
    pub total_size: u64,
}

impl ColumnStats {
    /// `" | "`-joined summary; zero-valued parts are left out.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.folder_count > 0 {
            parts.push(pluralize(self.folder_count, "folder"));
        }
        if self.file_count > 0 {
            parts.push(pluralize(self.file_count, "file"));
        }
        if self.hidden_count > 0 {
            parts.push(format!("{} hidden", self.hidden_count));
        }
        if self.total_size > 0 {
            parts.push(format_size(self.total_size));
        }

        parts.join(" | ")
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, noun)
    } else {
        format!("{} {}", count, noun)
    }
}

/// Format size in human-readable form: plain bytes below 1 KB, otherwise the
/// largest of KB/MB/GB (1024-based) reached, with one decimal place.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

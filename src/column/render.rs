use std::time::Duration;

use serde::Serialize;

use super::hover::HoverTimer;
use super::listing::list_folder;
use super::presentation::{display_label, resolve_icon, Icon};
use super::stats::ColumnStats;
use crate::config::Config;
use crate::error::ExplorerError;
use crate::vault::{parent_path, Entry, Vault};

/// One visible entry of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnItem {
    /// Vault path of the entry; doubles as the item's identity
    pub path: String,
    pub name: String,
    pub is_folder: bool,
    /// Depth of the owning column
    pub depth: usize,
    pub icon: Icon,
    pub label: String,
    /// Folders show a trailing chevron
    pub has_arrow: bool,
    /// Being dragged
    pub dragging: bool,
    /// Highlighted as a drop target
    pub drag_over: bool,
    /// Part of the open browsing path
    pub active: bool,
}

/// The scrollable item region of a column; also the background drop zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentRegion {
    pub items: Vec<ColumnItem>,
    /// Inline error line shown instead of items
    pub message: Option<String>,
    /// Highlighted as a drop target for "into this folder"
    pub drag_over: bool,
}

/// The rendered contents of one folder in the column sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub path: String,
    pub depth: usize,
    pub content: ContentRegion,
    pub stats: ColumnStats,
    /// Joined summary line shown under the items
    pub stats_line: String,
    #[serde(skip)]
    pub(crate) hover_delay: Duration,
}

impl ColumnItem {
    fn new<V: Vault + ?Sized>(entry: &Entry, depth: usize, vault: &V, config: &Config) -> Self {
        Self {
            path: entry.path().to_string(),
            name: entry.name().to_string(),
            is_folder: entry.is_folder(),
            depth,
            icon: resolve_icon(entry, vault, config),
            label: display_label(entry, vault),
            has_arrow: entry.is_folder(),
            dragging: false,
            drag_over: false,
            active: false,
        }
    }

    /// Tag carried in drag data next to the path.
    pub fn type_tag(&self) -> &'static str {
        if self.is_folder {
            "folder"
        } else {
            "file"
        }
    }
}

impl Column {
    /// Render the column for `path` at position `depth`.
    ///
    /// Lookup problems do not fail the render: the column comes back empty
    /// with an inline message.
    pub fn render<V: Vault + ?Sized>(vault: &V, config: &Config, path: &str, depth: usize) -> Self {
        let mut column = Self {
            path: path.to_string(),
            depth,
            content: ContentRegion::default(),
            stats: ColumnStats::default(),
            stats_line: String::new(),
            hover_delay: config.hover_delay(),
        };
        column.refresh(vault, config);
        column
    }

    /// Clear and rebuild this column's contents in place, keeping its path
    /// and depth.
    ///
    /// The hover timer lives with the host and is left alone; follow up with
    /// [`Column::release_stale_hover`] so a spring-load armed for an item
    /// that disappeared does not fire.
    pub fn refresh<V: Vault + ?Sized>(&mut self, vault: &V, config: &Config) {
        self.content = ContentRegion::default();
        self.stats = ColumnStats::default();
        self.stats_line.clear();
        self.hover_delay = config.hover_delay();

        let listing = match list_folder(vault, &self.path, &config.exclusion_patterns()) {
            Ok(listing) => listing,
            Err(err) => {
                match &err {
                    ExplorerError::NotAFolder(_) => {
                        tracing::warn!(path = %self.path, "Path is not a folder or does not exist")
                    }
                    other => tracing::error!(path = %self.path, error = ?other, "Error accessing folder"),
                }
                self.content.message = Some(err.to_string());
                return;
            }
        };

        let entries = listing
            .folders
            .into_iter()
            .map(Entry::Folder)
            .chain(listing.documents.into_iter().map(Entry::Document));

        self.content.items = entries
            .map(|entry| ColumnItem::new(&entry, self.depth, vault, config))
            .collect();
        self.stats = listing.stats;
        self.stats_line = listing.stats.summary();
    }

    pub fn items(&self) -> &[ColumnItem] {
        &self.content.items
    }

    pub fn item(&self, path: &str) -> Option<&ColumnItem> {
        self.content.items.iter().find(|i| i.path == path)
    }

    pub(crate) fn item_mut(&mut self, path: &str) -> Option<&mut ColumnItem> {
        self.content.items.iter_mut().find(|i| i.path == path)
    }

    /// Mark `path` as the active item at this depth, clearing any other.
    pub fn set_active(&mut self, path: Option<&str>) {
        for item in &mut self.content.items {
            item.active = Some(item.path.as_str()) == path;
        }
    }

    pub fn active_item(&self) -> Option<&ColumnItem> {
        self.content.items.iter().find(|i| i.active)
    }

    pub fn hover_delay(&self) -> Duration {
        self.hover_delay
    }

    /// Cancel a pending spring-load armed for a child of this column that is
    /// no longer listed. Timers armed elsewhere are kept.
    pub fn release_stale_hover(&self, timer: &mut HoverTimer) -> bool {
        let stale = match timer.armed_for() {
            Some(element) => parent_path(element) == self.path && self.item(element).is_none(),
            None => false,
        };
        if stale {
            tracing::debug!(path = %self.path, "Dropping hover timer for a removed item");
            timer.clear();
        }
        stale
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::column::hover::FolderOpenRequest;
    use crate::vault::MemoryVault;

    fn vault() -> MemoryVault {
        MemoryVault::new()
            .with_document("n/b.md", 10)
            .with_folder("n/Sub")
            .with_document("n/a.pdf", 20)
    }

    #[test]
    fn test_folders_come_before_documents() {
        let column = Column::render(&vault(), &Config::default(), "n", 1);
        let paths: Vec<_> = column.items().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["n/Sub", "n/a.pdf", "n/b.md"]);
        assert!(column.items().iter().all(|i| i.depth == 1));
        assert!(column.items()[0].has_arrow);
        assert_eq!(column.stats_line, "1 folder | 2 files | 30 B");
    }

    #[test]
    fn test_refresh_rebuilds_in_place() {
        let config = Config::default();
        let mut column = Column::render(&vault(), &config, "n", 1);
        column.set_active(Some("n/Sub"));

        let updated = vault().with_document("n/c.md", 5);
        column.refresh(&updated, &config);

        assert_eq!(column.path, "n");
        assert_eq!(column.depth, 1);
        assert_eq!(column.items().len(), 4);
        assert!(column.active_item().is_none());
    }

    #[test]
    fn test_missing_folder_renders_message() {
        let column = Column::render(&vault(), &Config::default(), "gone", 2);
        assert!(column.items().is_empty());
        assert_eq!(column.content.message.as_deref(), Some("Not a folder: gone"));
        assert_eq!(column.stats_line, "");
    }

    #[test]
    fn test_set_active_is_exclusive() {
        let mut column = Column::render(&vault(), &Config::default(), "n", 0);
        column.set_active(Some("n/a.pdf"));
        column.set_active(Some("n/b.md"));
        assert_eq!(column.active_item().map(|i| i.path.as_str()), Some("n/b.md"));
        assert_eq!(column.items().iter().filter(|i| i.active).count(), 1);
    }

    fn armed(element: &str) -> HoverTimer {
        let mut timer = HoverTimer::new();
        let request = FolderOpenRequest {
            path: element.to_string(),
            depth: 1,
        };
        timer.arm(element, request, Duration::from_millis(100), Instant::now());
        timer
    }

    #[test]
    fn test_release_stale_hover_after_refresh() {
        let config = Config::default();
        let mut column = Column::render(&vault(), &config, "n", 1);
        let mut timer = armed("n/Sub");

        column.refresh(&MemoryVault::new().with_document("n/b.md", 10), &config);
        assert!(timer.is_armed());

        assert!(column.release_stale_hover(&mut timer));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_release_stale_hover_keeps_live_and_foreign_timers() {
        let column = Column::render(&vault(), &Config::default(), "n", 1);

        let mut live = armed("n/Sub");
        assert!(!column.release_stale_hover(&mut live));
        assert_eq!(live.armed_for(), Some("n/Sub"));

        let mut foreign = armed("other/Sub");
        assert!(!column.release_stale_hover(&mut foreign));
        assert!(foreign.is_armed());
    }
}

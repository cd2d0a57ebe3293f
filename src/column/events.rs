//! Click and drag-and-drop handling for a rendered column.
//!
//! Item handlers run first. An item that handles an event returns
//! [`Propagation::Stop`] and the background handler is skipped; otherwise the
//! event reaches the content background, which acts only when it is itself the
//! event target.

use std::collections::BTreeMap;

use serde::Serialize;

use super::hover::FolderOpenRequest;
use super::host::ColumnHost;
use super::render::Column;

/// MIME key holding the dragged entry's path.
pub const PATH_FORMAT: &str = "text/plain";
/// MIME key holding the dragged entry's type tag (`folder` or `file`).
pub const TYPE_FORMAT: &str = "text/type";

/// Sub-element of an item row an event can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemPart {
    Row,
    Icon,
    Label,
    Arrow,
}

/// Where an event landed, relative to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The content region itself, between or below items
    Background,
    /// An item row or one of its children
    Item { path: String, part: ItemPart },
    /// Anywhere outside this column
    Elsewhere,
}

impl Target {
    pub fn item(path: &str) -> Self {
        Target::Item {
            path: path.to_string(),
            part: ItemPart::Row,
        }
    }

    fn item_path(&self) -> Option<&str> {
        match self {
            Target::Item { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether this target is the item `path` or one of its children.
    pub fn is_within_item(&self, path: &str) -> bool {
        self.item_path() == Some(path)
    }

    /// Whether this target is inside the content region.
    pub fn is_within_content(&self) -> bool {
        !matches!(self, Target::Elsewhere)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    None,
    Copy,
    Link,
    Move,
}

/// Payload carried by a drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    data: BTreeMap<String, String>,
    pub effect_allowed: Option<DropEffect>,
    pub drop_effect: Option<DropEffect>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: &str, value: &str) {
        self.data.insert(format.to_string(), value.to_string());
    }

    /// Stored value for `format`; empty when absent.
    pub fn get_data(&self, format: &str) -> &str {
        self.data.get(format).map(String::as_str).unwrap_or("")
    }

    /// Payload describing a dragged entry.
    pub fn for_entry(path: &str, type_tag: &str) -> Self {
        let mut data = Self::new();
        data.set_data(PATH_FORMAT, path);
        data.set_data(TYPE_FORMAT, type_tag);
        data.effect_allowed = Some(DropEffect::Move);
        data
    }
}

/// A drag event delivered to a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    pub target: Target,
    /// Element the pointer moved to (for leave events)
    pub related_target: Option<Target>,
    pub data: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(target: Target, data: DataTransfer) -> Self {
        Self {
            target,
            related_target: None,
            data,
            default_prevented: false,
        }
    }

    pub fn with_related_target(mut self, related: Target) -> Self {
        self.related_target = Some(related);
        self
    }

    /// Marks the event as accepting a drop.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Whether an event should continue to the enclosing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// What a click asked the owning view to do.
#[derive(Debug)]
pub enum ClickOutcome {
    /// A document was opened in the workspace
    OpenedDocument,
    /// The next column was computed; the caller places it
    NextColumn(Option<Column>),
    /// Computing the next column failed; the user was notified
    Failed,
    /// No item with that path in this column
    Missing,
}

impl Column {
    pub fn handle_drag_start(&mut self, event: &mut DragEvent) {
        let Some(path) = event.target.item_path().map(str::to_string) else {
            return;
        };
        let Some(item) = self.item_mut(&path) else {
            return;
        };

        event.data.set_data(PATH_FORMAT, &item.path);
        event.data.set_data(TYPE_FORMAT, item.type_tag());
        event.data.effect_allowed = Some(DropEffect::Move);
        item.dragging = true;
        tracing::debug!(path = %item.path, kind = item.type_tag(), "Drag start");
    }

    pub fn handle_drag_end(&mut self, event: &DragEvent) {
        if let Some(item) = event.target.item_path().and_then(|p| self.item_mut(p)) {
            item.dragging = false;
        }
    }

    pub fn handle_drag_over<H: ColumnHost + ?Sized>(&mut self, event: &mut DragEvent, host: &mut H) {
        if self.item_drag_over(event, host) == Propagation::Stop {
            return;
        }
        self.background_drag_over(event, host);
    }

    pub fn handle_drag_leave<H: ColumnHost + ?Sized>(&mut self, event: &DragEvent, host: &mut H) {
        if self.item_drag_leave(event, host) == Propagation::Stop {
            return;
        }
        self.background_drag_leave(event, host);
    }

    pub fn handle_drop<H: ColumnHost + ?Sized>(&mut self, event: &mut DragEvent, host: &mut H) {
        if self.item_drop(event, host) == Propagation::Stop {
            return;
        }
        self.background_drop(event, host);
    }

    /// Select the item at `path` and then open it: documents in the
    /// workspace, folders as the next column.
    pub fn handle_click<H: ColumnHost + ?Sized>(&mut self, path: &str, host: &mut H) -> ClickOutcome {
        let Some(item) = self.item(path) else {
            return ClickOutcome::Missing;
        };

        host.on_item_click(item, item.is_folder, self.depth);

        if !item.is_folder {
            host.open_document(&item.path);
            return ClickOutcome::OpenedDocument;
        }

        match host.render_next_column(&item.path, self.depth + 1) {
            Ok(next) => ClickOutcome::NextColumn(next),
            Err(err) => {
                tracing::error!(path = %item.path, error = %err, "Error rendering next column");
                host.notify(&format!("Error rendering folder: {}", item.name));
                ClickOutcome::Failed
            }
        }
    }

    /// Folder items accept hovers and arm the spring-loaded timer once per
    /// entry into the item.
    fn item_drag_over<H: ColumnHost + ?Sized>(&mut self, event: &mut DragEvent, host: &mut H) -> Propagation {
        let depth = self.depth;
        let delay = self.hover_delay;
        let Some(item) = event.target.item_path().and_then(|p| self.content.items.iter_mut().find(|i| i.path == p)) else {
            return Propagation::Continue;
        };
        if !item.is_folder {
            return Propagation::Continue;
        }

        event.prevent_default();
        event.data.drop_effect = Some(DropEffect::Move);

        if !item.drag_over {
            item.drag_over = true;
            host.clear_hover_timer();
            let request = FolderOpenRequest {
                path: item.path.clone(),
                depth,
            };
            host.arm_hover_timer(&item.path, request, delay);
        }

        Propagation::Stop
    }

    fn item_drag_leave<H: ColumnHost + ?Sized>(&mut self, event: &DragEvent, host: &mut H) -> Propagation {
        let Some(item) = event.target.item_path().and_then(|p| self.content.items.iter_mut().find(|i| i.path == p)) else {
            return Propagation::Continue;
        };
        if !item.is_folder {
            return Propagation::Continue;
        }

        let still_inside = event
            .related_target
            .as_ref()
            .is_some_and(|t| t.is_within_item(&item.path));
        if !still_inside {
            item.drag_over = false;
            host.hover_timer().clear_for(&item.path);
        }

        Propagation::Stop
    }

    fn item_drop<H: ColumnHost + ?Sized>(&mut self, event: &mut DragEvent, host: &mut H) -> Propagation {
        let Some(item) = event.target.item_path().and_then(|p| self.content.items.iter_mut().find(|i| i.path == p)) else {
            return Propagation::Continue;
        };
        if !item.is_folder {
            return Propagation::Continue;
        }

        event.prevent_default();
        item.drag_over = false;
        host.clear_hover_timer();

        let source = event.data.get_data(PATH_FORMAT);
        let target = item.path.as_str();
        if source.is_empty() || source == target {
            tracing::debug!(%source, %target, "Drop ignored: missing path or dropping onto self");
        } else {
            tracing::info!(
                %source,
                kind = event.data.get_data(TYPE_FORMAT),
                %target,
                "Drop onto folder"
            );
            host.on_drop(source, target);
        }

        Propagation::Stop
    }

    fn background_drag_over<H: ColumnHost + ?Sized>(&mut self, event: &mut DragEvent, host: &mut H) {
        event.prevent_default();
        event.data.drop_effect = Some(DropEffect::Move);

        if event.target == Target::Background {
            self.content.drag_over = true;
            host.clear_hover_timer();
        } else {
            self.content.drag_over = false;
        }
    }

    fn background_drag_leave<H: ColumnHost + ?Sized>(&mut self, event: &DragEvent, host: &mut H) {
        self.content.drag_over = false;

        let left_column = !event
            .related_target
            .as_ref()
            .is_some_and(Target::is_within_content);
        if left_column {
            host.clear_hover_timer();
        }
    }

    fn background_drop<H: ColumnHost + ?Sized>(&mut self, event: &mut DragEvent, host: &mut H) {
        event.prevent_default();
        self.content.drag_over = false;
        host.clear_hover_timer();

        if event.target != Target::Background {
            tracing::debug!("Drop ignored: target was an item, not the column background");
            return;
        }

        let source = event.data.get_data(PATH_FORMAT);
        if source.is_empty() || source == self.path {
            tracing::debug!(%source, target = %self.path, "Drop ignored: missing path or dropping onto self");
            return;
        }

        tracing::info!(%source, target = %self.path, "Drop onto column background");
        host.on_drop(source, &self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_containment() {
        let icon = Target::Item {
            path: "a".into(),
            part: ItemPart::Icon,
        };
        assert!(icon.is_within_item("a"));
        assert!(!icon.is_within_item("b"));
        assert!(icon.is_within_content());
        assert!(Target::Background.is_within_content());
        assert!(!Target::Elsewhere.is_within_content());
    }

    #[test]
    fn test_data_transfer_for_entry() {
        let data = DataTransfer::for_entry("notes/a.md", "file");
        assert_eq!(data.get_data(PATH_FORMAT), "notes/a.md");
        assert_eq!(data.get_data(TYPE_FORMAT), "file");
        assert_eq!(data.get_data("text/html"), "");
        assert_eq!(data.effect_allowed, Some(DropEffect::Move));
    }
}

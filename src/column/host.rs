use std::time::{Duration, Instant};

use super::hover::{FolderOpenRequest, HoverTimer, TimerId};
use super::render::{Column, ColumnItem};
use crate::error::Result;

/// Capabilities the owning view provides to its columns.
///
/// Columns never place columns, scroll, move entries or open documents
/// themselves; every such decision goes through this trait.
pub trait ColumnHost {
    /// An item was clicked; the view updates its active-item state at `depth`.
    fn on_item_click(&mut self, item: &ColumnItem, is_folder: bool, depth: usize);

    /// Compute the column for `path` at `depth`. Placement is up to the caller
    /// of [`Column::handle_click`], which receives the result.
    fn render_next_column(&mut self, path: &str, depth: usize) -> Result<Option<Column>>;

    /// Move `source` into `target_folder`.
    fn on_drop(&mut self, source: &str, target_folder: &str);

    /// Open a document in the main workspace.
    fn open_document(&mut self, path: &str);

    /// Show a transient notification.
    fn notify(&mut self, message: &str);

    /// The timer slot shared by every column of the view.
    fn hover_timer(&mut self) -> &mut HoverTimer;

    /// A spring-loaded hover expired.
    fn request_folder_open(&mut self, path: &str, depth: usize);

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn arm_hover_timer(
        &mut self,
        element: &str,
        request: FolderOpenRequest,
        delay: Duration,
    ) -> TimerId {
        let now = self.now();
        self.hover_timer().arm(element, request, delay, now)
    }

    fn clear_hover_timer(&mut self) {
        self.hover_timer().clear();
    }
}

/// Deliver an expired hover request to the host. Returns whether one fired.
pub fn fire_hover_timer<H: ColumnHost + ?Sized>(host: &mut H) -> bool {
    let now = host.now();
    match host.hover_timer().take_due(now) {
        Some(request) => {
            tracing::debug!(path = %request.path, "Hover timer expired");
            host.request_folder_open(&request.path, request.depth);
            true
        }
        None => false,
    }
}

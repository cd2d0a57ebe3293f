//! A single Miller column: listing, presentation, drag-and-drop wiring and
//! the shared spring-loaded hover timer.

mod events;
mod formatter;
mod host;
mod hover;
mod listing;
mod presentation;
mod render;
mod stats;

pub use events::{
    ClickOutcome, DataTransfer, DragEvent, DropEffect, ItemPart, Propagation, Target, PATH_FORMAT,
    TYPE_FORMAT,
};
pub use formatter::{format_column, format_json, FormatOptions};
pub use host::{fire_hover_timer, ColumnHost};
pub use hover::{FolderOpenRequest, HoverTimer, TimerId};
pub use listing::{compare_names, list_folder, CollationKey, ExclusionPatterns, Listing};
pub use presentation::{
    default_glyph, display_label, document_glyph, resolve_icon, Glyph, Icon, DRAWING_SUFFIX,
};
pub use render::{Column, ColumnItem, ContentRegion};
pub use stats::{format_size, ColumnStats};

//! Miller Columns - a single column of a Miller-columns file browser
//!
//! This crate provides functionality for:
//! - Listing a vault folder with exclusion patterns and hidden-file rules
//! - Resolving per-item icons and labels
//! - Drag-and-drop handling with spring-loaded folders
//! - Column statistics

pub mod cli;
pub mod column;
pub mod commands;
pub mod config;
pub mod error;
pub mod vault;

// Re-export commonly used types
pub use column::{Column, ColumnHost, HoverTimer};
pub use config::Config;
pub use error::{ExplorerError, Result};
pub use vault::{MemoryVault, Vault};

//! Storage boundary: the read-only view of a vault that columns are built from.

mod entry;
mod fs;
mod heading;
mod memory;

pub use entry::{
    ends_with_ignore_ascii_case, name_of, split_extension, DocumentEntry, Entry, FolderEntry,
    Lookup,
};
pub use fs::FsVault;
pub use heading::first_heading;
pub use memory::MemoryVault;

use crate::error::VaultError;

/// Path of the vault root folder.
pub const ROOT: &str = "/";

/// Read-only access to the host's storage hierarchy.
///
/// Implementations return snapshots; nothing is cached across lookups.
pub trait Vault {
    /// Resolve `path`. Folders come back with their direct children.
    fn lookup(&self, path: &str) -> Result<Lookup, VaultError>;

    /// First heading extracted from a document, if any.
    fn first_heading(&self, document: &DocumentEntry) -> Option<String>;

    /// Turn a vault-relative resource path into a loadable reference.
    ///
    /// Failure is signaled by returning `relative` unchanged.
    fn resource_url(&self, relative: &str) -> String;
}

/// Normalize a vault-relative path: backslashes become `/`, repeated slashes
/// collapse, and leading/trailing slashes are dropped. An empty result is the
/// root.
pub fn normalize_path(path: &str) -> String {
    let joined = path
        .replace('\\', "/")
        .split('/')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        ROOT.to_string()
    } else {
        joined
    }
}

/// Join a child name onto a folder path.
pub fn join_path(folder: &str, name: &str) -> String {
    if folder == ROOT || folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder.trim_end_matches('/'), name)
    }
}

/// Parent folder of a vault path; top-level entries live in the root.
pub fn parent_path(path: &str) -> String {
    match normalize_path(path).rsplit_once('/') {
        Some((parent, _)) => parent.to_string(),
        None => ROOT.to_string(),
    }
}

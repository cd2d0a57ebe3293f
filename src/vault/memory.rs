use std::collections::{HashMap, HashSet};

use super::entry::{DocumentEntry, Entry, FolderEntry, Lookup};
use super::{normalize_path, parent_path, Vault, ROOT};
use crate::error::VaultError;

#[derive(Debug, Clone)]
enum Node {
    Folder,
    Document { size: u64 },
}

/// In-memory vault, for tests and for hosts that already hold a snapshot.
///
/// Children are returned in insertion order, like an unsorted directory read.
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    nodes: Vec<(String, Node)>,
    headings: HashMap<String, String>,
    resources: HashSet<String>,
    failures: HashSet<String>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder (and any missing parents).
    pub fn with_folder(mut self, path: &str) -> Self {
        self.insert_folder(&normalize_path(path));
        self
    }

    /// Add a document of `size` bytes (and any missing parent folders).
    pub fn with_document(mut self, path: &str, size: u64) -> Self {
        let path = normalize_path(path);
        self.insert_folder(&parent_path(&path));
        self.nodes.push((path, Node::Document { size }));
        self
    }

    /// Record extracted heading metadata for a document.
    pub fn with_heading(mut self, path: &str, heading: &str) -> Self {
        self.headings.insert(normalize_path(path), heading.to_string());
        self
    }

    /// Mark a vault-relative resource as loadable.
    pub fn with_resource(mut self, path: &str) -> Self {
        self.resources.insert(normalize_path(path));
        self
    }

    /// Make every lookup of `path` fail.
    pub fn with_failure(mut self, path: &str) -> Self {
        self.failures.insert(normalize_path(path));
        self
    }

    fn insert_folder(&mut self, path: &str) {
        if path == ROOT || self.find(path).is_some() {
            return;
        }
        self.insert_folder(&parent_path(path));
        self.nodes.push((path.to_string(), Node::Folder));
    }

    fn find(&self, path: &str) -> Option<&Node> {
        self.nodes.iter().find(|(p, _)| p == path).map(|(_, n)| n)
    }

    fn entry(path: &str, node: &Node) -> Entry {
        match node {
            Node::Folder => Entry::Folder(FolderEntry::new(path, Vec::new())),
            Node::Document { size } => Entry::Document(DocumentEntry::new(path, *size)),
        }
    }
}

impl Vault for MemoryVault {
    fn lookup(&self, path: &str) -> Result<Lookup, VaultError> {
        let path = normalize_path(path);
        if self.failures.contains(&path) {
            return Err(VaultError::Unavailable(format!("lookup of '{}' failed", path)));
        }

        let is_folder = path == ROOT || matches!(self.find(&path), Some(Node::Folder));
        if !is_folder {
            return Ok(match self.find(&path) {
                Some(Node::Document { size }) => Lookup::Document(DocumentEntry::new(path, *size)),
                _ => Lookup::Absent,
            });
        }

        let children = self
            .nodes
            .iter()
            .filter(|(p, _)| parent_path(p) == path)
            .map(|(p, n)| Self::entry(p, n))
            .collect();

        Ok(Lookup::Folder(FolderEntry::new(path, children)))
    }

    fn first_heading(&self, document: &DocumentEntry) -> Option<String> {
        self.headings.get(&document.path).cloned()
    }

    fn resource_url(&self, relative: &str) -> String {
        if self.resources.contains(&normalize_path(relative)) {
            format!("app://vault/{}", relative)
        } else {
            relative.to_string()
        }
    }
}

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::stats::ColumnStats;
use crate::error::{ExplorerError, Result};
use crate::vault::{DocumentEntry, Entry, FolderEntry, Lookup, Vault};

/// Lowercased substrings; any path containing one is hidden from columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPatterns(Vec<String>);

impl ExclusionPatterns {
    /// Parse the raw newline-separated setting. Lines are trimmed and
    /// lowercased; blank lines are dropped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.lines()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        let lower = path.to_lowercase();
        self.0.iter().any(|pattern| lower.contains(pattern.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The visible contents of one folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub folders: Vec<FolderEntry>,
    pub documents: Vec<DocumentEntry>,
    pub stats: ColumnStats,
}

/// Multi-level sort key for a display name.
///
/// Levels compare in order: base letters with accents and case folded away,
/// then accents, then case with lowercase first, then the raw name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(name: &str) -> Self {
        let decomposed: Vec<char> = name.nfd().collect();
        let secondary: String = decomposed.iter().flat_map(|c| c.to_lowercase()).collect();
        let primary = secondary
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        let tertiary = decomposed
            .iter()
            .filter(|c| !is_combining_mark(**c))
            .map(|c| c.is_uppercase())
            .collect();

        Self {
            primary,
            secondary,
            tertiary,
            raw: name.to_string(),
        }
    }
}

/// Locale-style name order: `a.md`, `A.md`, `apple.md`, `Éclair.md`, `Zebra.md`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// List the direct children of `path`, split into sorted folders and
/// documents with exclusions and hidden documents removed.
pub fn list_folder<V: Vault + ?Sized>(
    vault: &V,
    path: &str,
    patterns: &ExclusionPatterns,
) -> Result<Listing> {
    let children = match vault.lookup(path) {
        Ok(Lookup::Folder(folder)) => folder.children,
        Ok(_) => return Err(ExplorerError::NotAFolder(path.to_string())),
        Err(source) => {
            return Err(ExplorerError::Load {
                path: path.to_string(),
                source,
            })
        }
    };

    let mut folders = Vec::new();
    let mut documents = Vec::new();
    for child in children {
        match child {
            Entry::Folder(f) => folders.push(f),
            Entry::Document(d) => documents.push(d),
        }
    }

    let mut stats = ColumnStats::default();
    for doc in &documents {
        stats.total_size += doc.size;
        if doc.is_hidden() {
            stats.hidden_count += 1;
        }
    }

    folders.sort_by_cached_key(|f| CollationKey::new(&f.name));
    documents.sort_by_cached_key(|d| CollationKey::new(&d.name));

    folders.retain(|f| !patterns.is_excluded(&f.path));
    documents.retain(|d| !patterns.is_excluded(&d.path) && !d.is_hidden());

    stats.folder_count = folders.len();
    stats.file_count = documents.len();

    Ok(Listing {
        folders,
        documents,
        stats,
    })
}

use serde::Serialize;

/// A folder snapshot. `children` is only populated for the folder that was
/// looked up; nested folders carry an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    pub path: String,
    pub name: String,
    pub children: Vec<Entry>,
}

/// A document snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    /// Vault-relative path, unique within the vault
    pub path: String,

    /// File name including extension
    pub name: String,

    /// Name without the final extension
    pub basename: String,

    /// Final extension without the dot (may be empty)
    pub extension: String,

    /// Size in bytes
    pub size: u64,
}

/// Either kind of node in the vault hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Folder(FolderEntry),
    Document(DocumentEntry),
}

/// Result of resolving a vault path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Folder(FolderEntry),
    Document(DocumentEntry),
    Absent,
}

impl FolderEntry {
    pub fn new(path: impl Into<String>, children: Vec<Entry>) -> Self {
        let path = path.into();
        let name = name_of(&path).to_string();
        Self {
            path,
            name,
            children,
        }
    }
}

impl DocumentEntry {
    /// Build a document, deriving `name`, `basename` and `extension` from the path.
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let name = name_of(&path).to_string();
        let (basename, extension) = split_extension(&name);
        Self {
            basename: basename.to_string(),
            extension: extension.to_string(),
            path,
            name,
            size,
        }
    }

    /// Hidden documents are dot-prefixed.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

impl Entry {
    pub fn path(&self) -> &str {
        match self {
            Entry::Folder(f) => &f.path,
            Entry::Document(d) => &d.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Folder(f) => &f.name,
            Entry::Document(d) => &d.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }
}

/// Last path component. The vault root `/` names itself.
pub fn name_of(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Split `name` at its last dot. A leading dot alone does not start an
/// extension, so `.gitignore` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, ext),
        _ => (name, ""),
    }
}

/// Case-insensitive ASCII suffix check that never splits a multi-byte char.
pub fn ends_with_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

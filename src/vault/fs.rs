use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::entry::{DocumentEntry, Entry, FolderEntry, Lookup};
use super::{first_heading, join_path, normalize_path, Vault, ROOT};
use crate::error::{ExplorerError, Result, VaultError};

/// Vault backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: &Path) -> Result<Self> {
        let root = root.canonicalize().map_err(|e| ExplorerError::Io {
            path: root.to_path_buf(),
            source: e,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a vault path onto the filesystem, refusing to escape the root.
    fn resolve(&self, path: &str) -> std::result::Result<PathBuf, VaultError> {
        let path = normalize_path(path);
        if path == ROOT {
            return Ok(self.root.clone());
        }

        let relative = Path::new(&path);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(VaultError::InvalidPath(path));
        }

        Ok(self.root.join(relative))
    }

    fn read_children(&self, folder: &str, dir: &Path) -> std::result::Result<Vec<Entry>, VaultError> {
        let mut children = Vec::new();

        for result in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = result.map_err(std::io::Error::from)?;
            let name = entry.file_name().to_string_lossy().to_string();
            let path = join_path(folder, &name);

            if entry.file_type().is_dir() {
                children.push(Entry::Folder(FolderEntry::new(path, Vec::new())));
            } else {
                let size = entry.metadata().map_err(std::io::Error::from)?.len();
                children.push(Entry::Document(DocumentEntry::new(path, size)));
            }
        }

        Ok(children)
    }
}

impl Vault for FsVault {
    fn lookup(&self, path: &str) -> std::result::Result<Lookup, VaultError> {
        let full = self.resolve(path)?;
        let path = normalize_path(path);

        let metadata = match fs::metadata(&full) {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Lookup::Absent),
            Err(e) => return Err(e.into()),
        };

        if metadata.is_dir() {
            let children = self.read_children(&path, &full)?;
            Ok(Lookup::Folder(FolderEntry::new(path, children)))
        } else {
            Ok(Lookup::Document(DocumentEntry::new(path, metadata.len())))
        }
    }

    fn first_heading(&self, document: &DocumentEntry) -> Option<String> {
        if !document.extension.eq_ignore_ascii_case("md") {
            return None;
        }

        let full = self.resolve(&document.path).ok()?;
        match fs::read_to_string(&full) {
            Ok(text) => first_heading(&text),
            Err(e) => {
                tracing::debug!(path = %full.display(), error = %e, "Could not read document metadata");
                None
            }
        }
    }

    fn resource_url(&self, relative: &str) -> String {
        match self.resolve(relative) {
            Ok(full) if full.is_file() => format!("file://{}", full.display()),
            _ => relative.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lists_direct_children_with_sizes() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("notes/deep")).unwrap();
        fs::write(temp.path().join("notes/a.md"), "# Alpha\n").unwrap();
        fs::write(temp.path().join("notes/deep/b.md"), "x").unwrap();

        let vault = FsVault::new(temp.path()).unwrap();
        let Lookup::Folder(folder) = vault.lookup("notes").unwrap() else {
            panic!("expected folder");
        };

        assert_eq!(folder.children.len(), 2);
        let doc = folder
            .children
            .iter()
            .find_map(|c| match c {
                Entry::Document(d) => Some(d),
                _ => None,
            })
            .unwrap();
        assert_eq!(doc.path, "notes/a.md");
        assert_eq!(doc.size, 8);
        assert_eq!(vault.first_heading(doc), Some("Alpha".into()));
    }

    #[test]
    fn test_missing_path_is_absent() {
        let temp = tempdir().unwrap();
        let vault = FsVault::new(temp.path()).unwrap();
        assert_eq!(vault.lookup("nope").unwrap(), Lookup::Absent);
    }

    #[test]
    fn test_parent_components_are_rejected() {
        let temp = tempdir().unwrap();
        let vault = FsVault::new(temp.path()).unwrap();
        assert!(matches!(
            vault.lookup("../etc"),
            Err(VaultError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_resources_resolve_only_when_present() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("icons")).unwrap();
        fs::write(temp.path().join("icons/star.png"), [0u8; 4]).unwrap();

        let vault = FsVault::new(temp.path()).unwrap();
        assert!(vault.resource_url("icons/star.png").starts_with("file://"));
        assert_eq!(vault.resource_url("icons/gone.png"), "icons/gone.png");
    }
}

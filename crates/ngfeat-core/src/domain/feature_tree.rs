use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, naming::NameForms};

/// The directories and files planned for one feature, ready for
/// materialization.
///
/// Entry paths are relative to `root`. It contains no business logic, only
/// data.
#[derive(Debug, Clone)]
pub struct FeatureTree {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl FeatureTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyTree);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path_str = entry.path().display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Look up a planned file by its path relative to the root.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

/// A child to be registered in its parent's routes file once the tree has
/// been written.
#[derive(Debug, Clone)]
pub struct RoutesRegistration {
    /// Routes file, relative to the tree root.
    pub path: PathBuf,
    pub parent: NameForms,
    pub child: NameForms,
    /// Import specifier of the child's component, relative to `path`.
    pub import_path: String,
}

/// Everything one run will do: the tree, then the optional routes merge.
#[derive(Debug, Clone)]
pub struct FeaturePlan {
    pub tree: FeatureTree,
    pub routes: Option<RoutesRegistration>,
}

impl FeaturePlan {
    /// Absolute-or-cwd-relative location of the routes file, if any.
    pub fn routes_path(&self) -> Option<PathBuf> {
        self.routes.as_ref().map(|r| self.tree.root.join(&r.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_invalid() {
        assert_eq!(
            FeatureTree::new("src/app/x").validate(),
            Err(DomainError::EmptyTree)
        );
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let tree = FeatureTree::new("root")
            .with_directory("data")
            .with_directory("data");
        assert!(matches!(
            tree.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn file_lookup_by_relative_path() {
        let tree = FeatureTree::new("root")
            .with_directory("data")
            .with_file("data/a.service.ts", "x".into());
        assert!(tree.validate().is_ok());
        assert_eq!(tree.file("data/a.service.ts").unwrap().content, "x");
        assert!(tree.file("data/b.service.ts").is_none());
        assert_eq!(tree.files().count(), 1);
        assert_eq!(tree.directories().count(), 1);
    }
}

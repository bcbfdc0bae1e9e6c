//! Content tree discovery.
//!
//! The content directory is scanned up front into the directories the build
//! tree needs and the files to process, so every output directory can be
//! created before any file is written.

use std::path::{Path, PathBuf};

use super::paths::is_markdown;

#[derive(thiserror::Error, Debug)]
pub enum WalkError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A file found in the content tree, by path relative to the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// A markdown document that will be rendered to HTML
    Document(PathBuf),
    /// Any other file, copied byte for byte
    Static(PathBuf),
}

impl ContentItem {
    pub fn source_path(&self) -> &Path {
        match self {
            ContentItem::Document(path) | ContentItem::Static(path) => path,
        }
    }
}

/// The shape of a content tree.
#[derive(Debug, Default)]
pub struct ContentTree {
    /// Subdirectories relative to the root, every parent before its children
    pub dirs: Vec<PathBuf>,
    /// Files relative to the root, in traversal order
    pub items: Vec<ContentItem>,
}

impl ContentTree {
    /// Scan a content directory. Entries are visited in file name order so
    /// that repeated scans of the same tree agree.
    pub fn scan(root: &Path) -> Result<Self, WalkError> {
        let mut tree = Self::default();
        tree.walk_directory(root, Path::new(""))?;
        Ok(tree)
    }

    pub fn document_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, ContentItem::Document(_)))
            .count()
    }

    fn walk_directory(&mut self, dir: &Path, relative_path: &Path) -> Result<(), WalkError> {
        let entries = std::fs::read_dir(dir).map_err(|e| WalkError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut entries = entries
            .map(|entry| {
                entry.map_err(|e| WalkError::ReadEntry {
                    path: dir.to_path_buf(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let relative = relative_path.join(entry.file_name());
            let file_type = entry.file_type().map_err(|e| WalkError::ReadEntry {
                path: dir.to_path_buf(),
                source: e,
            })?;

            if file_type.is_dir() {
                self.dirs.push(relative.clone());
                self.walk_directory(&path, &relative)?;
            } else if file_type.is_symlink() && path.is_dir() {
                // Linked directories are never descended into
                tracing::debug!("skipping directory symlink {}", path.display());
            } else if is_markdown(&relative) {
                self.items.push(ContentItem::Document(relative));
            } else {
                self.items.push(ContentItem::Static(relative));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, relative).unwrap();
    }

    #[test]
    fn test_scan_orders_parents_first() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b/z/deep.md");
        touch(dir.path(), "a/page.md");
        touch(dir.path(), "b/image.png");
        touch(dir.path(), "index.md");
        std::fs::create_dir_all(dir.path().join("empty")).unwrap();

        let tree = ContentTree::scan(dir.path()).unwrap();

        assert_eq!(
            tree.dirs,
            vec![
                PathBuf::from("a"),
                PathBuf::from("b"),
                PathBuf::from("b/z"),
                PathBuf::from("empty"),
            ]
        );
        assert_eq!(
            tree.items,
            vec![
                ContentItem::Document("a/page.md".into()),
                ContentItem::Static("b/image.png".into()),
                ContentItem::Document("b/z/deep.md".into()),
                ContentItem::Document("index.md".into()),
            ]
        );
        assert_eq!(tree.document_count(), 3);
    }

    #[test]
    fn test_every_dir_follows_its_parent() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "x/y/z/file.txt");
        touch(dir.path(), "x/a/file.txt");

        let tree = ContentTree::scan(dir.path()).unwrap();

        for (i, d) in tree.dirs.iter().enumerate() {
            if let Some(parent) = d.parent().filter(|p| !p.as_os_str().is_empty()) {
                let parent_pos = tree.dirs.iter().position(|p| p == parent).unwrap();
                assert!(parent_pos < i, "{} listed before its parent", d.display());
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlinks_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "sub/page.md");
        touch(dir.path(), "shared.txt");
        std::os::unix::fs::symlink("..", dir.path().join("sub/up")).unwrap();
        std::os::unix::fs::symlink("../shared.txt", dir.path().join("sub/linked.txt")).unwrap();

        let tree = ContentTree::scan(dir.path()).unwrap();

        assert_eq!(tree.dirs, vec![PathBuf::from("sub")]);
        assert_eq!(
            tree.items,
            vec![
                ContentItem::Static("shared.txt".into()),
                ContentItem::Static("sub/linked.txt".into()),
                ContentItem::Document("sub/page.md".into()),
            ]
        );
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = ContentTree::scan(&dir.path().join("missing"));
        assert!(matches!(result, Err(WalkError::ReadDir { .. })));
    }
}

//! Entry snapshots read from a single directory level

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One filesystem node observed while listing a directory.
///
/// Entries are read fresh on every visit and used once: each produces one
/// rendered line and, for directories, one recursive descent. Nothing is
/// cached across levels.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display name, also the ordering key.
    pub name: String,
    /// Exact path used for descent; never goes through lossy decoding.
    pub path: PathBuf,
    /// Whether this entry is a directory. Symlinks keep their own identity,
    /// so a link to a directory is not one.
    pub is_dir: bool,
    /// Byte length from the entry's own metadata; meaningful for files only.
    pub size: u64,
}

/// Read the immediate children of `path`, unordered.
///
/// A single-level read: no recursion, one directory listing per call. Any
/// I/O failure (missing path, not a directory, permission denied, unreadable
/// entry metadata) is returned unchanged to the caller.
pub fn list_entries(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for dirent in fs::read_dir(path)? {
        let dirent = dirent?;
        // DirEntry metadata does not traverse symlinks, so a link reports
        // its own file type and length.
        let metadata = dirent.metadata()?;
        entries.push(Entry {
            name: dirent.file_name().to_string_lossy().into_owned(),
            path: dirent.path(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempTree;

    #[test]
    fn test_lists_names_kinds_and_sizes() {
        let tree = TempTree::new();
        tree.add_file("a.txt", "hello");
        tree.add_dir("sub");

        let mut entries = list_entries(tree.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert!(!entries[0].is_dir);
        assert_eq!(entries[0].size, 5);
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_dir);
    }

    #[test]
    fn test_empty_directory_lists_nothing() {
        let tree = TempTree::new();
        assert!(list_entries(tree.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let tree = TempTree::new();
        let err = list_entries(&tree.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_listing_a_file_fails() {
        let tree = TempTree::new();
        let file = tree.add_file("plain.txt", "x");
        assert!(list_entries(&file).is_err());
    }

    #[test]
    fn test_paths_point_back_into_the_listed_directory() {
        let tree = TempTree::new();
        tree.add_dir("inner");

        let entries = list_entries(tree.path()).unwrap();
        assert_eq!(entries[0].path, tree.path().join("inner"));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_to_directory_is_not_a_directory() {
        use std::os::unix::fs::symlink;

        let tree = TempTree::new();
        tree.add_dir("real");
        symlink(tree.path().join("real"), tree.path().join("link"))
            .expect("Failed to create symlink");

        let entries = list_entries(tree.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert!(!link.is_dir);
    }
}

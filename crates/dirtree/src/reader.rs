use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::{Entry, EntryKind};

/// Filesystem queries the tree renderer needs.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryReader {
    /// Resolves `path` to its absolute, symlink-free location.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn exists(&self, path: &Path) -> bool;

    /// Returns whether `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists the immediate children of `directory` in the order the
    /// underlying listing yields them.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be opened or an entry cannot
    /// be read.
    fn read_entries(&self, directory: &Path) -> io::Result<Vec<Entry>>;
}

/// [`DirectoryReader`] backed by the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalDirectoryReader;

impl DirectoryReader for LocalDirectoryReader {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_entries(&self, directory: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(directory)? {
            let dir_entry = dir_entry?;
            entries.push(Entry {
                kind: entry_kind(&dir_entry.path()),
                name: dir_entry.file_name(),
            });
        }

        Ok(entries)
    }
}

/// Classifies `path` with one metadata query. Unresolvable entries are files.
fn entry_kind(path: &Path) -> EntryKind {
    if fs::metadata(path).is_ok_and(|metadata| metadata.is_dir()) {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn sorted(mut entries: Vec<Entry>) -> Vec<Entry> {
        entries.sort_by(|first, second| first.name.cmp(&second.name));

        entries
    }

    #[test]
    fn test_read_entries_classifies_directories_and_files() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("src")).expect("test expectation should hold");
        fs::write(temp_dir.path().join("Cargo.toml"), "").expect("test expectation should hold");

        // Act
        let entries = LocalDirectoryReader
            .read_entries(temp_dir.path())
            .expect("test expectation should hold");

        // Assert
        assert_eq!(
            sorted(entries),
            vec![Entry::file("Cargo.toml"), Entry::directory("src")]
        );
    }

    #[test]
    fn test_read_entries_never_yields_dot_entries() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::write(temp_dir.path().join(".hidden"), "").expect("test expectation should hold");

        // Act
        let entries = LocalDirectoryReader
            .read_entries(temp_dir.path())
            .expect("test expectation should hold");

        // Assert
        assert_eq!(entries, vec![Entry::file(".hidden")]);
    }

    #[test]
    fn test_read_entries_missing_directory_fails() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");

        // Act
        let result = LocalDirectoryReader.read_entries(&temp_dir.path().join("missing"));

        // Assert
        assert!(result.is_err_and(|error| error.kind() == io::ErrorKind::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_entries_follows_directory_symlinks() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("target")).expect("test expectation should hold");
        std::os::unix::fs::symlink(
            temp_dir.path().join("target"),
            temp_dir.path().join("linked"),
        )
        .expect("test expectation should hold");
        std::os::unix::fs::symlink(
            temp_dir.path().join("nowhere"),
            temp_dir.path().join("dangling"),
        )
        .expect("test expectation should hold");

        // Act
        let entries = LocalDirectoryReader
            .read_entries(temp_dir.path())
            .expect("test expectation should hold");

        // Assert
        assert_eq!(
            sorted(entries),
            vec![
                Entry::file("dangling"),
                Entry::directory("linked"),
                Entry::directory("target"),
            ]
        );
    }

    #[test]
    fn test_local_reader_path_checks() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let file_path = temp_dir.path().join("notes.md");
        fs::write(&file_path, "").expect("test expectation should hold");

        // Act & Assert
        assert!(LocalDirectoryReader.exists(&file_path));
        assert!(!LocalDirectoryReader.is_dir(&file_path));
        assert!(LocalDirectoryReader.is_dir(temp_dir.path()));
        assert!(!LocalDirectoryReader.exists(&temp_dir.path().join("missing")));
    }
}

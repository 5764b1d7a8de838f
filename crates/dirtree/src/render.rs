//! Recursive text rendering of a directory tree.

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::entry::{Entry, EntryKind, partition_entries};
use crate::error::TreeError;
use crate::reader::{DirectoryReader, LocalDirectoryReader};

const DIRECTORY_GLYPH: &str = "📂 ";
const FILE_GLYPH: &str = "📄 ";
const ERROR_GLYPH: &str = "❌ ";
const BRANCH_CONNECTOR: &str = "├── ";
const LAST_CONNECTOR: &str = "└── ";
const INDENT_UNIT: &str = "    ";
const CONTINUATION_SEGMENT: &str = "│   ";

/// Renders a directory and everything beneath it as a multi-line string.
///
/// The renderer keeps no state between calls, so one instance can render
/// any number of paths, from several threads if the reader allows it.
#[derive(Clone, Debug, Default)]
pub struct TreeRenderer<R = LocalDirectoryReader> {
    reader: R,
}

impl TreeRenderer {
    /// Creates a renderer that reads the local filesystem.
    pub fn new() -> Self {
        Self {
            reader: LocalDirectoryReader,
        }
    }
}

impl<R: DirectoryReader> TreeRenderer<R> {
    /// Creates a renderer that lists directories through `reader`.
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Renders `path` as a tree: a `📂` header with the directory's base
    /// name, then its children with directories listed before files.
    ///
    /// Subdirectories that cannot be listed render a single `❌` marker
    /// line beneath them and the rest of the tree still renders.
    ///
    /// # Errors
    /// Returns [`TreeError::InvalidPath`] if `path` cannot be resolved,
    /// [`TreeError::PathNotFound`] if it does not exist and
    /// [`TreeError::NotADirectory`] if it is not a directory. No output is
    /// produced in any of these cases.
    pub fn render(&self, path: impl AsRef<Path>) -> Result<String, TreeError> {
        let root = self.resolve_root(path.as_ref())?;
        debug!(root = %root.display(), "rendering directory tree");

        let mut output = root_line(&root);
        output.push_str(&self.render_children(&root, 0));

        Ok(output)
    }

    /// Canonicalizes `path` and checks that it is an existing directory.
    fn resolve_root(&self, path: &Path) -> Result<PathBuf, TreeError> {
        if path.as_os_str().is_empty() {
            return Err(TreeError::InvalidPath {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty path"),
            });
        }

        let resolved = match self.reader.canonicalize(path) {
            Ok(resolved) => resolved,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(TreeError::PathNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(TreeError::InvalidPath {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if !self.reader.exists(&resolved) {
            return Err(TreeError::PathNotFound { path: resolved });
        }

        if !self.reader.is_dir(&resolved) {
            return Err(TreeError::NotADirectory { path: resolved });
        }

        Ok(resolved)
    }

    /// Lists `directory` and renders its children at `depth`, or an error
    /// marker line when the listing fails.
    fn render_children(&self, directory: &Path, depth: usize) -> String {
        match self.reader.read_entries(directory) {
            Ok(entries) => {
                debug!(
                    directory = %directory.display(),
                    entries = entries.len(),
                    "listed directory"
                );

                self.render_level(&partition_entries(entries), directory, depth)
            }
            Err(error) => {
                warn!(
                    directory = %directory.display(),
                    %error,
                    "directory could not be listed"
                );

                format!("{}{LAST_CONNECTOR}{ERROR_GLYPH}{error}\n", indentation(depth))
            }
        }
    }

    /// Renders one level of already partitioned `entries` that belong to
    /// `directory`, recursing into subdirectories.
    fn render_level(&self, entries: &[Entry], directory: &Path, depth: usize) -> String {
        let indentation = indentation(depth);
        let mut output = String::new();

        for (index, entry) in entries.iter().enumerate() {
            let connector = if index + 1 == entries.len() {
                LAST_CONNECTOR
            } else {
                BRANCH_CONNECTOR
            };
            let glyph = match entry.kind {
                EntryKind::Directory => DIRECTORY_GLYPH,
                EntryKind::File => FILE_GLYPH,
            };

            let _ = writeln!(
                output,
                "{indentation}{connector}{glyph}{}",
                entry.display_name()
            );

            if entry.is_dir() {
                output.push_str(&self.render_children(&directory.join(&entry.name), depth + 1));
            }
        }

        output
    }
}

/// Header line for the resolved root. The filesystem root has no base name
/// and shows its full path instead.
fn root_line(root: &Path) -> String {
    let name = root
        .file_name()
        .map_or_else(|| root.to_string_lossy(), |name| name.to_string_lossy());

    format!("{DIRECTORY_GLYPH}{name}\n")
}

/// Leading indentation for entries at `depth`.
///
/// Every level past the first adds four spaces, and the first segment is a
/// single continuation bar regardless of which ancestors were last children.
fn indentation(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut indentation = String::from(CONTINUATION_SEGMENT);
    indentation.push_str(&INDENT_UNIT.repeat(depth - 1));

    indentation
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a tree cannot be rendered, in the order they are checked.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The path could not be resolved to a real filesystem location.
    #[error("invalid path: {}", .path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path does not exist: {}", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
}

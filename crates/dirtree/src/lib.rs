//! Renders a directory as an indented text tree, listing directories before
//! files at every level.

pub mod entry;
pub mod error;
pub mod reader;
pub mod render;

pub use entry::{Entry, EntryKind};
pub use error::TreeError;
pub use reader::{DirectoryReader, LocalDirectoryReader};
pub use render::TreeRenderer;

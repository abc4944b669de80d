//! Static, read-only virtual file tree served to the desktop shell.
//!
//! The tree is constructed once at startup (see [`builtin_catalog`]) and never mutated. Every
//! node carries an id that is unique across the whole tree regardless of nesting depth; the
//! desktop window manager uses that id as the identity key of the window opened from it.

mod catalog;
mod registry;
mod types;

pub use catalog::builtin_catalog;
pub use registry::{FileLookup, FileRegistry, RegistryError};
pub use types::{FileId, FileKind, FileNode};

//! File tree node types shared by the registry and the desktop runtime.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable identifier of a [`FileNode`], unique across the whole tree.
pub struct FileId(pub String);

impl FileId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrows the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FileId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Node kind.
pub enum FileKind {
    /// Container with child nodes.
    Folder,
    /// Plain text document.
    Text,
    /// Portfolio project entry with optional technologies and link.
    Project,
}

impl FileKind {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Text => "text",
            Self::Project => "project",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Immutable entry of the virtual file tree.
pub struct FileNode {
    /// Globally unique id.
    pub id: FileId,
    /// Display name (also used as window title).
    pub name: String,
    /// Node kind.
    pub kind: FileKind,
    /// Text payload for text and project nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Child nodes (folders only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
    /// Icon or screenshot asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Technologies listed for project nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    /// External link for project nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// One-line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FileNode {
    /// Returns `true` for folder nodes.
    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }
}

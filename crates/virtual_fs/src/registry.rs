//! Id-indexed, read-only view over the virtual file tree.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{FileId, FileKind, FileNode};

/// Read-only id lookup consumed by the desktop window manager.
pub trait FileLookup {
    /// Resolves a node anywhere in the tree by its id.
    fn lookup(&self, id: &str) -> Option<&FileNode>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while building a [`FileRegistry`].
pub enum RegistryError {
    /// The catalog document could not be parsed.
    #[error("file catalog parse failed: {0}")]
    Parse(String),
    /// A node has an empty id.
    #[error("file `{name}` has an empty id")]
    EmptyId {
        /// Display name of the offending node.
        name: String,
    },
    /// Two nodes share the same id.
    #[error("duplicate file id `{0}`")]
    DuplicateId(FileId),
    /// A non-folder node declares children.
    #[error("file `{0}` has children but is not a folder")]
    ChildrenOnNonFolder(FileId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static file tree plus an index from id to the node's position in the tree.
pub struct FileRegistry {
    roots: Vec<FileNode>,
    index: HashMap<FileId, Vec<usize>>,
}

impl FileRegistry {
    /// Builds a registry from root nodes, validating id uniqueness at every depth.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when an id is empty or duplicated, or when a non-folder node
    /// declares children.
    pub fn from_nodes(roots: Vec<FileNode>) -> Result<Self, RegistryError> {
        let mut index = HashMap::new();
        let mut pending: Vec<(Vec<usize>, &FileNode)> = roots
            .iter()
            .enumerate()
            .map(|(position, node)| (vec![position], node))
            .collect();

        while let Some((path, node)) = pending.pop() {
            if node.id.as_str().trim().is_empty() {
                return Err(RegistryError::EmptyId {
                    name: node.name.clone(),
                });
            }
            if node.kind != FileKind::Folder && !node.children.is_empty() {
                return Err(RegistryError::ChildrenOnNonFolder(node.id.clone()));
            }
            for (position, child) in node.children.iter().enumerate() {
                let mut child_path = path.clone();
                child_path.push(position);
                pending.push((child_path, child));
            }
            if index.insert(node.id.clone(), path).is_some() {
                return Err(RegistryError::DuplicateId(node.id.clone()));
            }
        }

        Ok(Self { roots, index })
    }

    /// Parses a JSON array of root nodes and builds a registry from it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed JSON, or any validation error from
    /// [`FileRegistry::from_nodes`].
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let roots = serde_json::from_str::<Vec<FileNode>>(raw)
            .map_err(|err| RegistryError::Parse(err.to_string()))?;
        Self::from_nodes(roots)
    }

    /// Top-level nodes, in catalog order (the desktop icon column).
    pub fn roots(&self) -> &[FileNode] {
        &self.roots
    }

    /// Number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` when `id` names a node somewhere in the tree.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn node_at(&self, path: &[usize]) -> Option<&FileNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.roots.get(*first)?, |node, position| {
                node.children.get(*position)
            })
    }
}

impl FileLookup for FileRegistry {
    fn lookup(&self, id: &str) -> Option<&FileNode> {
        self.index.get(id).and_then(|path| self.node_at(path))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn node(id: &str, kind: FileKind, children: Vec<FileNode>) -> FileNode {
        FileNode {
            id: FileId::from(id),
            name: id.to_uppercase(),
            kind,
            content: None,
            children,
            image_path: None,
            technologies: Vec::new(),
            url: None,
            description: None,
        }
    }

    #[test]
    fn lookup_resolves_nested_nodes() {
        let registry = FileRegistry::from_nodes(vec![
            node("readme", FileKind::Text, Vec::new()),
            node(
                "work",
                FileKind::Folder,
                vec![node(
                    "archive",
                    FileKind::Folder,
                    vec![node("old", FileKind::Project, Vec::new())],
                )],
            ),
        ])
        .expect("valid tree");

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.roots().len(), 2);
        assert_eq!(
            registry.lookup("old").map(|n| n.name.as_str()),
            Some("OLD")
        );
        assert_eq!(
            registry.lookup("archive").map(|n| n.kind),
            Some(FileKind::Folder)
        );
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected_across_depths() {
        let err = FileRegistry::from_nodes(vec![
            node("notes", FileKind::Text, Vec::new()),
            node(
                "folder",
                FileKind::Folder,
                vec![node("notes", FileKind::Text, Vec::new())],
            ),
        ])
        .expect_err("duplicate id");
        assert_eq!(err, RegistryError::DuplicateId(FileId::from("notes")));
    }

    #[test]
    fn children_on_text_nodes_are_rejected() {
        let err = FileRegistry::from_nodes(vec![node(
            "readme",
            FileKind::Text,
            vec![node("inner", FileKind::Text, Vec::new())],
        )])
        .expect_err("text with children");
        assert_eq!(err, RegistryError::ChildrenOnNonFolder(FileId::from("readme")));
    }

    #[test]
    fn empty_ids_are_rejected() {
        let err = FileRegistry::from_nodes(vec![node(" ", FileKind::Text, Vec::new())])
            .expect_err("empty id");
        assert!(matches!(err, RegistryError::EmptyId { .. }));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = FileRegistry::from_json("[{\"id\":").expect_err("bad json");
        assert!(matches!(err, RegistryError::Parse(_)));
    }
}

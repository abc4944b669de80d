//! Window body derivation from virtual file nodes.

use virtual_fs::{FileKind, FileNode};

use crate::model::{FolderEntry, WindowContent};

/// Derives the body of a window opened from `node`.
///
/// Called once at window creation; the result is stored on the record. Text and project nodes
/// whose content is missing or blank render as [`WindowContent::Placeholder`].
pub fn window_content(node: &FileNode) -> WindowContent {
    match node.kind {
        FileKind::Folder => WindowContent::FolderListing {
            entries: node.children.iter().map(FolderEntry::from).collect(),
        },
        FileKind::Text | FileKind::Project => match node.content.as_deref() {
            Some(body) if !body.trim().is_empty() => WindowContent::Text {
                body: body.to_string(),
                description: node.description.clone(),
                image_path: node.image_path.clone(),
                technologies: node.technologies.clone(),
                url: node.url.clone(),
            },
            _ => WindowContent::Placeholder,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use virtual_fs::{builtin_catalog, FileLookup};

    use super::*;

    #[test]
    fn folder_lists_children_in_catalog_order() {
        let files = builtin_catalog().expect("catalog");
        let folder = files.lookup("projects").expect("projects");

        let WindowContent::FolderListing { entries } = window_content(folder) else {
            panic!("expected folder listing");
        };
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["project-1", "project-2", "project-3"]);
        assert_eq!(entries[0].kind, FileKind::Project);
    }

    #[test]
    fn project_content_carries_chips_and_link() {
        let files = builtin_catalog().expect("catalog");
        let project = files.lookup("project-3").expect("project 3");

        match window_content(project) {
            WindowContent::Text {
                body,
                description,
                technologies,
                url,
                image_path,
            } => {
                assert!(body.starts_with("# Project 3"));
                assert_eq!(description.as_deref(), Some("Description of project 3"));
                assert_eq!(technologies, vec!["React Native", "Firebase", "Redux"]);
                assert_eq!(
                    url.as_deref(),
                    Some("https://github.com/your-username/project3")
                );
                assert_eq!(image_path.as_deref(), Some("/images/project3.png"));
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn plain_documents_have_no_summary() {
        let files = builtin_catalog().expect("catalog");
        let readme = files.lookup("readme").expect("readme");

        let WindowContent::Text { description, .. } = window_content(readme) else {
            panic!("expected text content");
        };
        assert_eq!(description, None);
    }

    #[test]
    fn blank_text_renders_placeholder() {
        let files = builtin_catalog().expect("catalog");
        let drafts = files.lookup("drafts").expect("drafts");
        assert_eq!(window_content(drafts), WindowContent::Placeholder);
    }
}

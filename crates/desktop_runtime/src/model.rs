use serde::{Deserialize, Serialize};
use virtual_fs::{FileId, FileKind, FileNode};

use crate::{config::DesktopConfig, geometry, responsive};

/// Window identity. A window is keyed by the id of the file it was opened from, so at most one
/// window exists per file.
pub type WindowId = FileId;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Finite and non-negative in both dimensions.
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Browser viewport dimensions in CSS pixels.
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Finite and strictly positive; anything else is a transient bogus report.
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Rendered window rectangle.
pub struct WindowRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl WindowRect {
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }

    pub fn position(self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(self) -> f64 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Creation-time position normalized to viewport fractions.
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Child icon shown inside a folder window.
pub struct FolderEntry {
    pub id: FileId,
    pub name: String,
    pub kind: FileKind,
    pub image_path: Option<String>,
}

impl From<&FileNode> for FolderEntry {
    fn from(node: &FileNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind,
            image_path: node.image_path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// Window body derived from a [`FileNode`] once, when the window is created.
pub enum WindowContent {
    /// Icon grid of a folder's children.
    FolderListing {
        /// Children in catalog order.
        entries: Vec<FolderEntry>,
    },
    /// Text or project payload.
    Text {
        /// Document body.
        body: String,
        /// One-line project summary shown above the body.
        description: Option<String>,
        /// Screenshot asset shown below the body.
        image_path: Option<String>,
        /// Technology chips.
        technologies: Vec<String>,
        /// External link.
        url: Option<String>,
    },
    /// Document without content yet.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub kind: FileKind,
    pub image_path: Option<String>,
    pub content: WindowContent,
    /// Top-left corner; ignored for layout while maximized.
    pub position: Position,
    /// Ignored for layout while maximized.
    pub size: Size,
    pub minimized: bool,
    pub maximized: bool,
    pub z_index: u32,
    /// Normalized creation-time position used for proportional repositioning.
    pub anchor: Option<Anchor>,
}

impl WindowRecord {
    /// Restored (non-maximized) rectangle.
    pub fn rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Window-manager aggregate. All mutation goes through [`crate::reduce_desktop`].
pub struct DesktopState {
    /// Open windows in creation order (taskbar order). Stacking is decided by `z_index`.
    pub windows: Vec<WindowRecord>,
    /// Last usable viewport reported by the host.
    pub viewport: Viewport,
    pub config: DesktopConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopState {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            viewport: config.fallback_viewport,
            config,
        }
    }

    pub fn window(&self, window_id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id.as_str() == window_id)
    }

    /// Highest z-index among tracked windows.
    pub fn max_z_index(&self) -> Option<u32> {
        self.windows.iter().map(|w| w.z_index).max()
    }

    /// Topmost window that is currently rendered.
    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    pub fn is_resolution_supported(&self) -> bool {
        responsive::is_supported(self.viewport, self.config.min_supported_viewport)
    }

    /// Rectangle a window occupies on screen: the workspace when maximized, its own geometry
    /// otherwise.
    pub fn rendered_rect(&self, window: &WindowRecord) -> WindowRect {
        if window.maximized {
            geometry::maximized_rect(self.viewport, &self.config)
        } else {
            window.rect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Edge or corner handle grabbed to resize a window.
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::West,
        Self::East,
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Compass token (`n`, `se`, ...), used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub const fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer offset from the window's top-left corner at grab time.
    pub grab_offset: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    /// Window rectangle when the resize started; every move is computed against it.
    pub baseline: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Transient pointer interaction state, owned separately from [`DesktopState`].
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }

    /// Ends any interaction that targets `window_id`.
    pub fn release_window(&mut self, window_id: &str) {
        if self
            .dragging
            .as_ref()
            .is_some_and(|session| session.window_id.as_str() == window_id)
        {
            self.dragging = None;
        }
        if self
            .resizing
            .as_ref()
            .is_some_and(|session| session.window_id.as_str() == window_id)
        {
            self.resizing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_edges_cover_each_compass_direction_once() {
        for edge in ResizeEdge::ALL {
            let horizontal = edge.moves_east() as u8 + edge.moves_west() as u8;
            let vertical = edge.moves_north() as u8 + edge.moves_south() as u8;
            assert!(horizontal <= 1 && vertical <= 1, "{edge:?}");
            assert_eq!(horizontal + vertical, edge.token().len() as u8, "{edge:?}");
        }
    }

    #[test]
    fn viewport_usability_rejects_zero_and_nan() {
        assert!(Viewport::new(1280.0, 720.0).is_usable());
        assert!(!Viewport::new(0.0, 720.0).is_usable());
        assert!(!Viewport::new(f64::NAN, 720.0).is_usable());
    }
}

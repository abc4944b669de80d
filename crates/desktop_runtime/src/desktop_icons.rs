//! Desktop icon press, drag, and double-click handling.
//!
//! Icons are freely draggable; their offsets live here and never touch [`crate::DesktopState`].
//! A double-click that lands right after a drag is swallowed so repositioning an icon does not
//! open it.

use std::collections::HashMap;

use virtual_fs::FileId;

use crate::{
    config::DesktopConfig,
    model::{PointerPosition, Position},
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IconDragState {
    /// Translation from the icon's grid slot.
    pub offset: Position,
    /// Double-clicks before this timestamp are ignored.
    pub suppress_open_until_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct IconPress {
    id: FileId,
    pointer_start: PointerPosition,
    offset_start: Position,
    dragging: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopIconController {
    icons: HashMap<FileId, IconDragState>,
    press: Option<IconPress>,
    drag_threshold: f64,
    open_cooldown_ms: f64,
}

impl Default for DesktopIconController {
    fn default() -> Self {
        Self::new(&DesktopConfig::default())
    }
}

impl DesktopIconController {
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            icons: HashMap::new(),
            press: None,
            drag_threshold: config.icon_drag_threshold,
            open_cooldown_ms: config.icon_open_cooldown_ms,
        }
    }

    pub fn offset(&self, id: &str) -> Position {
        self.icons.get(id).map(|icon| icon.offset).unwrap_or_default()
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.press
            .as_ref()
            .is_some_and(|press| press.dragging && press.id.as_str() == id)
    }

    /// `true` between a pointer-down on an icon and the matching pointer-up.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn pointer_down(&mut self, id: FileId, pointer: PointerPosition) {
        if !pointer.is_finite() {
            return;
        }
        let offset_start = self.offset(id.as_str());
        self.press = Some(IconPress {
            id,
            pointer_start: pointer,
            offset_start,
            dragging: false,
        });
    }

    /// Tracks the pressed icon. Returns `true` when an offset changed.
    ///
    /// The press becomes a drag once the pointer has travelled past the threshold; from then on
    /// the icon follows the pointer exactly.
    pub fn pointer_move(&mut self, pointer: PointerPosition) -> bool {
        let Some(press) = self.press.as_mut() else {
            return false;
        };
        if !pointer.is_finite() {
            return false;
        }

        let dx = pointer.x - press.pointer_start.x;
        let dy = pointer.y - press.pointer_start.y;
        if !press.dragging && dx.hypot(dy) < self.drag_threshold {
            return false;
        }
        press.dragging = true;

        let offset = Position::new(press.offset_start.x + dx, press.offset_start.y + dy);
        self.icons.entry(press.id.clone()).or_default().offset = offset;
        true
    }

    /// Releases the press. A completed drag starts the open cooldown for that icon.
    pub fn pointer_up(&mut self, now_ms: f64) {
        let Some(press) = self.press.take() else {
            return;
        };
        if press.dragging {
            self.icons.entry(press.id).or_default().suppress_open_until_ms =
                now_ms + self.open_cooldown_ms;
        }
    }

    /// Resolves a double-click to the file that should be opened, if any.
    pub fn double_click(&self, id: &str, now_ms: f64) -> Option<FileId> {
        if self.is_dragging(id) {
            return None;
        }
        let suppressed = self
            .icons
            .get(id)
            .is_some_and(|icon| now_ms < icon.suppress_open_until_ms);
        (!suppressed).then(|| FileId::from(id))
    }

    /// Drops the active press without starting a cooldown.
    pub fn release_press(&mut self) {
        self.press = None;
    }

    /// Returns every icon to its grid slot.
    pub fn reset(&mut self) {
        self.icons.clear();
        self.press = None;
    }
}

//! Reducer actions, side-effect intents, and transition logic for the window manager.

use leptos::logging;
use thiserror::Error;
use virtual_fs::{FileId, FileLookup, FileNode};

use crate::{
    content::window_content,
    geometry,
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, Position, ResizeEdge,
        ResizeSession, Size, Viewport, WindowId, WindowRecord,
    },
    responsive::GateTransition,
    window_manager::{next_z_index, raise_window},
};

#[derive(Debug, Clone, PartialEq)]
/// Intents accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the window for a file, or refocus and unminimize it if already open.
    OpenFile {
        /// File to open; becomes the window id.
        file_id: FileId,
    },
    /// Close a window. Closing an unknown window is a no-op.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack and unminimize it.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Hide a window without changing its stacking.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle the maximized flag; restored geometry is kept untouched.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Overwrite a window's position.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: Position,
    },
    /// Overwrite a window's size.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New size.
        size: Size,
    },
    /// Pointer-down on a title bar: focus the window and start dragging it.
    BeginMove {
        /// Window whose title bar was grabbed.
        window_id: WindowId,
        /// Pointer position at grab time.
        pointer: PointerPosition,
    },
    /// Pointer-move during a drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up ending a drag.
    EndMove,
    /// Pointer-down on a resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Handle that was grabbed.
        edge: ResizeEdge,
        /// Pointer position at grab time.
        pointer: PointerPosition,
    },
    /// Pointer-move during a resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up ending a resize.
    EndResize,
    /// The host viewport changed size.
    ViewportChanged {
        /// New viewport dimensions.
        viewport: Viewport,
    },
    /// Discard every window (logout).
    ResetSession,
}

impl DesktopAction {
    /// Actions that stay reachable while the resolution gate blocks the desktop.
    fn allowed_while_gated(&self) -> bool {
        matches!(
            self,
            Self::ViewportChanged { .. } | Self::ResetSession | Self::EndMove | Self::EndResize
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// A window was created (not emitted when an existing window is refocused).
    WindowOpened(WindowId),
    /// The resolution gate opened or closed.
    ResolutionGateChanged {
        /// Whether the new viewport is supported.
        supported: bool,
    },
    /// The window collection was discarded.
    SessionReset,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action was not applied. State is left untouched whenever one is returned.
pub enum ReducerError {
    /// The target window id is not tracked.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
    /// The file id is not in the registry.
    #[error("file `{0}` not found")]
    FileNotFound(FileId),
    /// The viewport is below the minimum supported resolution.
    #[error("viewport below the minimum supported resolution")]
    ResolutionUnsupported,
    /// The action carried a non-finite or otherwise unusable value.
    #[error("invalid geometry in {0}")]
    InvalidGeometry(&'static str),
}

/// Applies a [`DesktopAction`] and returns the resulting side effects.
///
/// Rejected actions are logged and leave the state untouched, so stale UI events (a click on a
/// window that was just closed, a transient zero-sized viewport) can never break the session.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    files: &dyn FileLookup,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    match try_reduce_desktop(state, interaction, files, action) {
        Ok(effects) => effects,
        Err(err) => {
            logging::warn!("ignored desktop action: {err}");
            Vec::new()
        }
    }
}

/// Fallible form of [`reduce_desktop`], reporting why an action was ignored.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action targets an unknown window or file, arrives while
/// the resolution gate is closed, or carries unusable geometry. Closing an unknown window is
/// not an error.
pub fn try_reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    files: &dyn FileLookup,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    if !action.allowed_while_gated() && !state.is_resolution_supported() {
        return Err(ReducerError::ResolutionUnsupported);
    }

    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenFile { file_id } => {
            if !raise_window(state, file_id.as_str()) {
                let node = files
                    .lookup(file_id.as_str())
                    .ok_or_else(|| ReducerError::FileNotFound(file_id.clone()))?;
                let record = new_window_record(state, node);
                state.windows.push(record);
                effects.push(RuntimeEffect::WindowOpened(file_id));
            }
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.retain(|w| w.id != window_id);
            interaction.release_window(window_id.as_str());
        }
        DesktopAction::FocusWindow { window_id } => {
            if !raise_window(state, window_id.as_str()) {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            find_window_mut(state, &window_id)?.minimized = true;
            interaction.release_window(window_id.as_str());
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            window.maximized = !window.maximized;
            interaction.release_window(window_id.as_str());
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            let window = find_window_mut(state, &window_id)?;
            window.position = geometry::sanitize_position(position, window.position);
        }
        DesktopAction::ResizeWindow { window_id, size } => {
            let window = find_window_mut(state, &window_id)?;
            window.size = geometry::sanitize_size(size, window.size);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if !pointer.is_finite() {
                return Err(ReducerError::InvalidGeometry("drag start"));
            }
            let window = find_window(state, &window_id)?;
            let (maximized, position) = (window.maximized, window.position);
            raise_window(state, window_id.as_str());
            if !maximized && interaction.resizing.is_none() {
                interaction.dragging = Some(DragSession {
                    window_id,
                    grab_offset: Position::new(pointer.x - position.x, pointer.y - position.y),
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            let Some(session) = interaction.dragging.clone() else {
                return Ok(effects);
            };
            if !pointer.is_finite() {
                return Err(ReducerError::InvalidGeometry("drag move"));
            }
            match state.windows.iter_mut().find(|w| w.id == session.window_id) {
                Some(window) if !window.maximized => {
                    window.position = Position::new(
                        pointer.x - session.grab_offset.x,
                        pointer.y - session.grab_offset.y,
                    );
                }
                Some(_) => {}
                None => interaction.dragging = None,
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            if !pointer.is_finite() {
                return Err(ReducerError::InvalidGeometry("resize start"));
            }
            let window = find_window(state, &window_id)?;
            if !window.maximized {
                let baseline = window.rect();
                raise_window(state, window_id.as_str());
                interaction.dragging = None;
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    baseline,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            let Some(session) = interaction.resizing.clone() else {
                return Ok(effects);
            };
            if !pointer.is_finite() {
                return Err(ReducerError::InvalidGeometry("resize move"));
            }
            let bounds = geometry::size_bounds(state.viewport, &state.config);
            let rect = geometry::resize_from_baseline(
                session.baseline,
                session.edge,
                pointer.x - session.pointer_start.x,
                pointer.y - session.pointer_start.y,
                bounds,
            );
            match state.windows.iter_mut().find(|w| w.id == session.window_id) {
                Some(window) if !window.maximized => {
                    window.position = rect.position();
                    window.size = rect.size();
                }
                Some(_) => {}
                None => interaction.resizing = None,
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ViewportChanged { viewport } => {
            if !viewport.is_usable() {
                return Err(ReducerError::InvalidGeometry("viewport"));
            }
            let transition = GateTransition::evaluate(
                state.viewport,
                viewport,
                state.config.min_supported_viewport,
            );
            state.viewport = viewport;
            if transition.changed() {
                effects.push(RuntimeEffect::ResolutionGateChanged {
                    supported: transition.is_supported,
                });
            }
            if transition.is_supported {
                reposition_windows(state);
            } else {
                *interaction = InteractionState::default();
            }
        }
        DesktopAction::ResetSession => {
            state.windows.clear();
            *interaction = InteractionState::default();
            effects.push(RuntimeEffect::SessionReset);
        }
    }

    Ok(effects)
}

fn new_window_record(state: &mut DesktopState, node: &FileNode) -> WindowRecord {
    let viewport = geometry::usable_viewport(state.viewport, state.config.fallback_viewport);
    let size = state.config.default_window_size;
    let position = geometry::initial_position(viewport, size, state.config.open_vertical_bias);

    WindowRecord {
        id: node.id.clone(),
        title: node.name.clone(),
        kind: node.kind,
        image_path: node.image_path.clone(),
        content: window_content(node),
        position,
        size,
        minimized: false,
        maximized: false,
        z_index: next_z_index(state),
        anchor: geometry::anchor_for(position, viewport),
    }
}

/// Moves every anchored window to its creation-relative spot in the current viewport.
fn reposition_windows(state: &mut DesktopState) {
    let viewport = state.viewport;
    for window in &mut state.windows {
        if let Some(anchor) = window.anchor {
            window.position = geometry::sanitize_position(
                geometry::anchored_position(anchor, viewport),
                window.position,
            );
        }
    }
}

fn find_window<'a>(
    state: &'a DesktopState,
    window_id: &WindowId,
) -> Result<&'a WindowRecord, ReducerError> {
    state
        .window(window_id.as_str())
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.id == window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

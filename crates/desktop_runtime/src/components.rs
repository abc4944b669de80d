//! Desktop shell UI composition and interaction surfaces.

mod icon_grid;
mod menu_bar;
mod pointer;
mod taskbar;
mod window;

use leptos::*;

use self::{
    icon_grid::DesktopIconGrid, menu_bar::MenuBar, pointer::install_pointer_tracking,
    taskbar::Taskbar, window::DesktopWindow,
};

use crate::{
    desktop_icons::DesktopIconController,
    host,
    icons::{icon_for_kind, FluentIcon, IconName, IconSize},
    model::{DesktopState, PointerPosition, Viewport, WindowRecord},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell, or the unsupported-resolution notice below the minimum
/// viewport.
pub fn DesktopShell(
    /// Invoked when the menu bar's About entry is chosen.
    #[prop(into)]
    on_about: Callback<()>,
    /// Invoked after the session has been reset by the menu bar's Log Out entry.
    #[prop(into)]
    on_logout: Callback<()>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let supported = Signal::derive(move || state.with(DesktopState::is_resolution_supported));

    install_pointer_tracking(runtime);

    let minimum = state.with_untracked(|state| state.config.min_supported_viewport);
    let viewport = Signal::derive(move || state.with(|state| state.viewport));

    view! {
        <Show
            when=move || supported.get()
            fallback=move || view! { <ResolutionNotice minimum viewport /> }
        >
            <div id="desktop-shell-root" class="desktop-shell">
                <MenuBar on_about on_logout />
                <div class="desktop-workspace">
                    <DesktopIconGrid />
                    <div class="desktop-window-layer">
                        <For
                            each=move || state.with(visible_windows)
                            key=|win| win.id.clone()
                            let:win
                        >
                            <DesktopWindow window_id=win.id />
                        </For>
                    </div>
                </div>
                <Taskbar />
            </div>
        </Show>
    }
}

#[component]
/// Blocking notice shown in place of any surface while the viewport is below `minimum`.
pub fn ResolutionNotice(
    minimum: Viewport,
    #[prop(into)] viewport: Signal<Viewport>,
) -> impl IntoView {
    let current = move || {
        let viewport = viewport.get();
        format!("Current window: {}x{}", viewport.width, viewport.height)
    };

    view! {
        <div class="resolution-notice" role="alert">
            <h1>"Screen too small"</h1>
            <p>
                {format!(
                    "This desktop needs a window of at least {}x{} pixels.",
                    minimum.width,
                    minimum.height,
                )}
            </p>
            <p class="resolution-notice-current">{current}</p>
        </div>
    }
}

/// Windows that are rendered: everything except minimized ones, in open order.
fn visible_windows(state: &DesktopState) -> Vec<WindowRecord> {
    state
        .windows
        .iter()
        .filter(|win| !win.minimized)
        .cloned()
        .collect()
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: f64::from(ev.client_x()),
        y: f64::from(ev.client_y()),
    }
}

/// Primary-button presses only; touch and pen must be the primary pointer.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn update_active_pointer_interaction(runtime: DesktopRuntimeContext, pointer: PointerPosition) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
    }

    if runtime
        .icons
        .with_untracked(DesktopIconController::is_pressed)
    {
        let mut icons = runtime.icons.get_untracked();
        if icons.pointer_move(pointer) {
            runtime.icons.set(icons);
        }
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }

    if runtime
        .icons
        .with_untracked(DesktopIconController::is_pressed)
    {
        let now_ms = host::now_ms();
        runtime.icons.update(|icons| icons.pointer_up(now_ms));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use virtual_fs::FileKind;

    use super::*;
    use crate::model::{Position, Size, WindowContent};

    fn record(id: &str, minimized: bool) -> WindowRecord {
        WindowRecord {
            id: id.into(),
            title: id.to_string(),
            kind: FileKind::Text,
            image_path: None,
            content: WindowContent::Placeholder,
            position: Position::default(),
            size: Size::new(600.0, 400.0),
            minimized,
            maximized: false,
            z_index: 100,
            anchor: None,
        }
    }

    #[test]
    fn minimized_windows_are_not_rendered() {
        let mut state = DesktopState::default();
        state.windows = vec![record("a", false), record("b", true), record("c", false)];

        let ids: Vec<String> = visible_windows(&state)
            .into_iter()
            .map(|win| win.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}

use std::time::Duration;

use super::*;
use crate::{host::ClockSnapshot, model::WindowId};
use virtual_fs::FileKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TaskbarItem {
    window_id: WindowId,
    title: String,
    kind: FileKind,
    /// Rendered on screen (not minimized).
    open: bool,
    focused: bool,
}

/// One entry per window in open order, regardless of stacking.
fn taskbar_items(state: &DesktopState) -> Vec<TaskbarItem> {
    let focused = state.focused_window_id();
    state
        .windows
        .iter()
        .map(|win| TaskbarItem {
            window_id: win.id.clone(),
            title: win.title.clone(),
            kind: win.kind,
            open: !win.minimized,
            focused: focused == Some(&win.id),
        })
        .collect()
}

fn taskbar_item_aria_label(item: &TaskbarItem) -> String {
    let status = if item.focused {
        "focused"
    } else if item.open {
        "open"
    } else {
        "minimized"
    };
    format!("{} ({status})", item.title)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <span class="taskbar-launcher" aria-hidden="true">
                <FluentIcon icon=IconName::Launcher size=IconSize::Md />
            </span>
            <div class="taskbar-windows">
                <For
                    each=move || state.with(taskbar_items)
                    key=|item| item.clone()
                    let:item
                >
                    {{
                        let aria_label = taskbar_item_aria_label(&item);
                        let window_id = item.window_id.clone();
                        view! {
                            <button
                                type="button"
                                class="taskbar-window"
                                class:focused=item.focused
                                class:minimized=!item.open
                                aria-label=aria_label
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::FocusWindow {
                                        window_id: window_id.clone(),
                                    });
                                }
                            >
                                <FluentIcon icon=icon_for_kind(item.kind) size=IconSize::Sm />
                                <span class="taskbar-window-title">{item.title.clone()}</span>
                                <Show when=move || item.open fallback=|| ()>
                                    <span class="taskbar-open-indicator" aria-hidden="true" />
                                </Show>
                            </button>
                        }
                    }}
                </For>
            </div>
            <time class="taskbar-clock">{move || clock_now.get().time_24h()}</time>
        </footer>
    }
}

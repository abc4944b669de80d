use super::*;
use crate::model::{FolderEntry, ResizeEdge, WindowContent, WindowId};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::icon_grid::FileIcon;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(initial) = runtime
        .state
        .with_untracked(|state| state.window(window_id.as_str()).cloned())
    else {
        return ().into_view();
    };
    let id = store_value(window_id);

    let geometry = create_memo(move |_| {
        runtime.state.with(|state| {
            id.with_value(|id| {
                state
                    .window(id.as_str())
                    .map(|win| (state.rendered_rect(win), win.z_index, win.maximized))
            })
        })
    });
    let is_focused = create_memo(move |_| {
        runtime
            .state
            .with(|state| id.with_value(|id| state.focused_window_id() == Some(id)))
    });
    let is_maximized = move || geometry.get().is_some_and(|(_, _, maximized)| maximized);
    let style = move || {
        geometry
            .get()
            .map(|(rect, z_index, _)| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    rect.x, rect.y, rect.w, rect.h, z_index
                )
            })
            .unwrap_or_default()
    };

    let focus = move |_: web_sys::PointerEvent| {
        if !is_focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let minimize = move || {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
        });
    };
    let close = move || {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };
    let swallow_pointerdown = |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <section
            class="desktop-window"
            class:focused=move || is_focused.get()
            class:maximized=is_maximized
            style=style
            on:pointerdown=focus
            role="dialog"
            aria-label=initial.title.clone()
            data-window-id=initial.id.to_string()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">
                        <FluentIcon icon=icon_for_kind(initial.kind) size=IconSize::Sm />
                    </span>
                    <span>{initial.title.clone()}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointerdown
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        <FluentIcon icon=IconName::WindowMinimize size=IconSize::Sm />
                    </button>
                    <button
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=swallow_pointerdown
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        {move || {
                            let icon = if is_maximized() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <FluentIcon icon=icon size=IconSize::Sm /> }
                        }}
                    </button>
                    <button
                        aria-label="Close window"
                        on:pointerdown=swallow_pointerdown
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        <FluentIcon icon=IconName::Dismiss size=IconSize::Sm />
                    </button>
                </div>
            </header>
            <div class="window-body">
                <WindowBody content=initial.content />
            </div>
            <Show when=move || !is_maximized() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=id edge=edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: StoredValue<WindowId>, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle edge-{}", edge.token());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.get_value(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            data-edge=edge.token()
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
/// Window body, rendered once from the content captured when the window was opened.
fn WindowBody(content: WindowContent) -> impl IntoView {
    match content {
        WindowContent::FolderListing { entries } => view! { <FolderListing entries /> }.into_view(),
        WindowContent::Text {
            body,
            description,
            image_path,
            technologies,
            url,
        } => view! {
            <article class="window-document">
                {description.map(|summary| view! {
                    <p class="window-document-summary">{summary}</p>
                })}
                <pre class="window-document-text">{body}</pre>
                {image_path.map(|path| view! {
                    <p class="window-document-image-note">
                        {format!("Image placeholder: {path}")}
                    </p>
                })}
                {(!technologies.is_empty()).then(|| view! {
                    <ul class="window-document-chips" aria-label="Technologies">
                        {technologies
                            .into_iter()
                            .map(|tech| view! { <li class="chip">{tech}</li> })
                            .collect_view()}
                    </ul>
                })}
                {url.map(|href| view! {
                    <a
                        class="window-document-link"
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View project"
                    </a>
                })}
            </article>
        }
        .into_view(),
        WindowContent::Placeholder => view! {
            <p class="window-placeholder">"This document has no content yet."</p>
        }
        .into_view(),
    }
}

#[component]
fn FolderListing(entries: Vec<FolderEntry>) -> impl IntoView {
    view! {
        <div class="folder-listing" role="list">
            {entries
                .into_iter()
                .map(|entry| view! { <FileIcon entry=entry /> })
                .collect_view()}
        </div>
    }
}

use super::*;
use crate::model::FolderEntry;

#[component]
pub(super) fn DesktopIconGrid() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = runtime.files.with_value(|files| {
        files
            .roots()
            .iter()
            .map(FolderEntry::from)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="desktop-icon-grid" role="list">
            {entries
                .into_iter()
                .map(|entry| view! { <FileIcon entry=entry /> })
                .collect_view()}
        </div>
    }
}

#[component]
/// Draggable file icon. Double-click opens the file unless the icon was just dragged.
pub(super) fn FileIcon(entry: FolderEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(entry.id.clone());

    let style = move || {
        let offset = id.with_value(|id| runtime.icons.with(|icons| icons.offset(id.as_str())));
        format!("transform:translate({}px,{}px);", offset.x, offset.y)
    };
    let dragging =
        move || id.with_value(|id| runtime.icons.with(|icons| icons.is_dragging(id.as_str())));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        runtime
            .icons
            .update(|icons| icons.pointer_down(id.get_value(), pointer));
    };
    let on_dblclick = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        let target = id.with_value(|id| {
            runtime
                .icons
                .with_untracked(|icons| icons.double_click(id.as_str(), host::now_ms()))
        });
        if let Some(file_id) = target {
            runtime.dispatch_action(DesktopAction::OpenFile { file_id });
        }
    };

    view! {
        <button
            type="button"
            class="desktop-icon"
            class:dragging=dragging
            role="listitem"
            style=style
            data-kind=entry.kind.token()
            on:pointerdown=on_pointerdown
            on:dblclick=on_dblclick
        >
            <span class="desktop-icon-glyph" aria-hidden="true">
                <FluentIcon icon=icon_for_kind(entry.kind) size=IconSize::Xl />
            </span>
            <span class="desktop-icon-label">{entry.name}</span>
        </button>
    }
}

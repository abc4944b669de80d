use super::*;
use crate::model::InteractionState;
use leptos::leptos_dom::helpers::WindowListenerHandle;

type PointerListeners = StoredValue<Option<Vec<WindowListenerHandle>>>;

/// Keeps window-level pointer listeners attached exactly while a window drag, window resize, or
/// icon press is in progress.
pub(super) fn install_pointer_tracking(runtime: DesktopRuntimeContext) {
    let listeners: PointerListeners = store_value(None);
    let active = create_memo(move |_| {
        runtime.interaction.with(|interaction| {
            runtime
                .icons
                .with(|icons| pointer_tracking_active(interaction, icons))
        })
    });

    create_effect(move |_| {
        if active.get() {
            listeners.update_value(|slot| {
                if slot.is_none() {
                    *slot = Some(attach(runtime));
                }
            });
        } else {
            detach(listeners);
        }
    });
    on_cleanup(move || detach(listeners));
}

/// Whether window-level pointer listeners should currently be attached.
fn pointer_tracking_active(interaction: &InteractionState, icons: &DesktopIconController) -> bool {
    interaction.is_active() || icons.is_pressed()
}

fn attach(runtime: DesktopRuntimeContext) -> Vec<WindowListenerHandle> {
    vec![
        window_event_listener(ev::pointermove, move |ev| {
            update_active_pointer_interaction(runtime, pointer_from_pointer_event(&ev));
        }),
        window_event_listener(ev::pointerup, move |_| {
            end_active_pointer_interaction(runtime);
        }),
        window_event_listener(ev::pointercancel, move |_| {
            end_active_pointer_interaction(runtime);
        }),
    ]
}

fn detach(listeners: PointerListeners) {
    let handles = listeners.try_update_value(Option::take).flatten();
    for handle in handles.into_iter().flatten() {
        handle.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DragSession, Position, ResizeEdge, ResizeSession, WindowRect};

    #[test]
    fn idle_desktop_has_no_pointer_listeners() {
        assert!(!pointer_tracking_active(
            &InteractionState::default(),
            &DesktopIconController::default(),
        ));
    }

    #[test]
    fn window_drag_and_resize_keep_listeners_attached() {
        let icons = DesktopIconController::default();
        let dragging = InteractionState {
            dragging: Some(DragSession {
                window_id: "readme".into(),
                grab_offset: Position::new(12.0, 8.0),
            }),
            resizing: None,
        };
        assert!(pointer_tracking_active(&dragging, &icons));

        let resizing = InteractionState {
            dragging: None,
            resizing: Some(ResizeSession {
                window_id: "readme".into(),
                edge: ResizeEdge::SouthEast,
                pointer_start: PointerPosition::new(400.0, 300.0),
                baseline: WindowRect {
                    x: 100.0,
                    y: 100.0,
                    w: 600.0,
                    h: 400.0,
                },
            }),
        };
        assert!(pointer_tracking_active(&resizing, &icons));
    }

    #[test]
    fn icon_press_attaches_until_release() {
        let interaction = InteractionState::default();
        let mut icons = DesktopIconController::default();

        icons.pointer_down("cv".into(), PointerPosition::new(40.0, 40.0));
        assert!(pointer_tracking_active(&interaction, &icons));

        icons.pointer_up(1_000.0);
        assert!(!pointer_tracking_active(&interaction, &icons));
    }
}

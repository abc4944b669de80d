use std::time::Duration;

use super::*;
use crate::host::ClockSnapshot;

#[component]
pub(super) fn MenuBar(on_about: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let menu_open = create_rw_signal(false);
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if menu_open.get_untracked() {
            menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let about = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        menu_open.set(false);
        on_about.call(());
    };
    let log_out = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        menu_open.set(false);
        runtime.dispatch_action(DesktopAction::ResetSession);
        on_logout.call(());
    };

    view! {
        <nav class="menu-bar" aria-label="Menu bar">
            <div class="menu-bar-system" on:mousedown=|ev| ev.stop_propagation()>
                <button
                    type="button"
                    class="menu-bar-system-button"
                    aria-haspopup="menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        menu_open.update(|open| *open = !*open);
                    }
                >
                    "Portfolio"
                </button>
                <Show when=move || menu_open.get() fallback=|| ()>
                    <div class="menu-bar-dropdown" role="menu">
                        <button type="button" role="menuitem" on:click=about>
                            <FluentIcon icon=IconName::Info size=IconSize::Sm />
                            <span>"About Portfolio"</span>
                        </button>
                        <button type="button" role="menuitem" on:click=log_out>
                            <FluentIcon icon=IconName::SignOut size=IconSize::Sm />
                            <span>"Log Out"</span>
                        </button>
                    </div>
                </Show>
            </div>
            <time class="menu-bar-clock">{move || clock_now.get().menu_bar_label()}</time>
        </nav>
    }
}

//! Login stage shown before a desktop session starts.

use std::time::Duration;

use desktop_runtime::host::ClockSnapshot;
use leptos::*;

#[component]
pub fn LoginScreen(
    /// Invoked when the guest account is chosen.
    #[prop(into)]
    on_login: Callback<()>,
) -> impl IntoView {
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="login-screen" on:click=move |_| on_login.call(())>
            <header class="login-clock">
                <h1>{move || clock_now.get().time_12h()}</h1>
                <p>{move || clock_now.get().long_date()}</p>
            </header>
            <div class="login-panel">
                <div class="login-avatar" aria-hidden="true"></div>
                <h2>"Guest"</h2>
                <button type="button" class="login-continue">
                    "Click to continue"
                </button>
            </div>
        </div>
    }
}

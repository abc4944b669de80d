//! Browser environment queries and runtime effect execution.
//!
//! Everything that touches `web_sys`/`js_sys` lives here behind `cfg(target_arch = "wasm32")`
//! with deterministic native fallbacks, so the reducer and the rest of the runtime stay testable
//! off the browser.

use leptos::*;

use crate::{
    components::DesktopRuntimeContext,
    model::Viewport,
    reducer::{DesktopAction, RuntimeEffect},
};

/// Current browser viewport, or `fallback` when the host cannot report one.
pub fn viewport_size(fallback: Viewport) -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window.inner_width().ok().and_then(|value| value.as_f64());
            let height = window.inner_height().ok().and_then(|value| value.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                return Viewport::new(width, height);
            }
        }
    }

    fallback
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1_000.0)
            .unwrap_or_default()
    }
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock reading used by the menu bar, taskbar, and login clocks.
pub struct ClockSnapshot {
    /// 0 = Sunday.
    pub weekday: u32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    /// `09:05 PM`
    pub fn time_12h(self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        format!("{hour:02}:{:02} {suffix}", self.minute)
    }

    /// `21:05`
    pub fn time_24h(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// `Oct 07 09:05 PM`
    pub fn menu_bar_label(self) -> String {
        format!("{} {:02} {}", self.month_name(3), self.day, self.time_12h())
    }

    /// `Tuesday, October 7`
    pub fn long_date(self) -> String {
        let weekday = WEEKDAYS
            .get(self.weekday as usize)
            .copied()
            .unwrap_or_default();
        format!("{weekday}, {} {}", self.month_name(usize::MAX), self.day)
    }

    fn month_name(self, max_len: usize) -> &'static str {
        let name = (self.month as usize)
            .checked_sub(1)
            .and_then(|index| MONTHS.get(index))
            .copied()
            .unwrap_or_default();
        &name[..name.len().min(max_len)]
    }
}

/// Feeds every browser resize into the reducer, starting with the current size.
pub fn install_viewport_tracking(runtime: DesktopRuntimeContext) {
    let report = move || {
        let fallback = runtime.state.with_untracked(|state| state.viewport);
        runtime.dispatch_action(DesktopAction::ViewportChanged {
            viewport: viewport_size(fallback),
        });
    };

    report();
    let resize_listener = window_event_listener(ev::resize, move |_| report());
    on_cleanup(move || resize_listener.remove());
}

/// Reactive browser viewport for surfaces that live outside a desktop session.
pub fn track_viewport(fallback: Viewport) -> ReadSignal<Viewport> {
    let (viewport, set_viewport) = create_signal(viewport_size(fallback));
    let resize_listener = window_event_listener(ev::resize, move |_| {
        set_viewport.set(viewport_size(viewport.get_untracked()));
    });
    on_cleanup(move || resize_listener.remove());
    viewport
}

/// Executes one reducer side effect.
pub fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::WindowOpened(window_id) => {
            logging::debug_warn!("window opened: {window_id}");
        }
        RuntimeEffect::ResolutionGateChanged { supported } => {
            let viewport = runtime.state.with_untracked(|state| state.viewport);
            if supported {
                logging::log!(
                    "desktop resumed at {}x{}",
                    viewport.width,
                    viewport.height
                );
            } else {
                logging::warn!(
                    "viewport {}x{} below minimum supported resolution; desktop gated",
                    viewport.width,
                    viewport.height
                );
                runtime.icons.update(|icons| icons.release_press());
            }
        }
        RuntimeEffect::SessionReset => {
            logging::log!("desktop session reset");
            runtime.icons.update(|icons| icons.reset());
        }
    }
}

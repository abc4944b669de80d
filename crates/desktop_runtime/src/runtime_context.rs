//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the file registry, and the icon controller
//! for one desktop session. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use virtual_fs::FileRegistry;

use crate::{
    config::DesktopConfig,
    desktop_icons::DesktopIconController,
    host,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Read-only file catalog backing this session.
    pub files: StoredValue<FileRegistry>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Desktop icon offsets and press tracking.
    pub icons: RwSignal<DesktopIconController>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
///
/// Every mount starts an empty session; unmounting the provider discards it.
pub fn DesktopProvider(
    /// File catalog the desktop exposes.
    files: FileRegistry,
    /// Window-manager parameters; defaults when omitted.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let icons = create_rw_signal(DesktopIconController::new(&config));
    let files = store_value(files);
    let state = create_rw_signal(DesktopState::new(config));
    let interaction = create_rw_signal(InteractionState::default());
    let effect_runtime = store_value(None::<DesktopRuntimeContext>);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let effects = files.with_value(|files| reduce_desktop(&mut desktop, &mut ui, files, action));

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if let Some(runtime) = effect_runtime.get_value() {
            for effect in effects {
                host::run_runtime_effect(runtime, effect);
            }
        }
    });

    let runtime = DesktopRuntimeContext {
        files,
        state,
        interaction,
        icons,
        dispatch,
    };
    effect_runtime.set_value(Some(runtime));

    provide_context(runtime.clone());

    host::install_viewport_tracking(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

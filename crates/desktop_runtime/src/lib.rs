//! Window manager and desktop shell for the portfolio desktop.
//!
//! [`reduce_desktop`] owns every state transition; the Leptos components in [`components`] only
//! render [`DesktopState`] and dispatch [`DesktopAction`] values through the runtime context.

pub mod components;
pub mod config;
pub mod content;
pub mod desktop_icons;
pub mod geometry;
pub mod host;
pub mod icons;
pub mod model;
pub mod reducer;
pub mod responsive;
mod runtime_context;
pub mod window_manager;

pub use components::{
    use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell, ResolutionNotice,
};
pub use config::{ConfigError, DesktopConfig};
pub use desktop_icons::DesktopIconController;
pub use icons::{FluentIcon, IconName, IconSize};
pub use model::*;
pub use reducer::{reduce_desktop, try_reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};

use desktop_runtime::{
    host, responsive, DesktopConfig, DesktopProvider, DesktopShell, ResolutionNotice, Viewport,
};
use leptos::*;
use leptos_meta::*;
use virtual_fs::builtin_catalog;

use crate::{about::AboutDialog, login::LoginScreen};

/// Window-manager overrides shipped with the site.
const DESKTOP_CONFIG: &str = include_str!("desktop_config.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Top-level stage of the site.
pub enum SessionStage {
    #[default]
    Login,
    Desktop,
}

/// Loads the site's desktop parameters, falling back to the stock ones when the bundled
/// override document is rejected.
pub fn site_config() -> DesktopConfig {
    DesktopConfig::from_json(DESKTOP_CONFIG).unwrap_or_else(|err| {
        logging::error!("{err}; using default desktop config");
        DesktopConfig::default()
    })
}

/// Whether any site surface (login, desktop, dialogs) may render at `viewport`.
pub fn surface_supported(config: &DesktopConfig, viewport: Viewport) -> bool {
    responsive::is_supported(viewport, config.min_supported_viewport)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = store_value(site_config());
    let stage = create_rw_signal(SessionStage::default());
    let minimum = config.with_value(|config| config.min_supported_viewport);
    let viewport = host::track_viewport(config.with_value(|config| config.fallback_viewport));
    let supported =
        Signal::derive(move || config.with_value(|config| surface_supported(config, viewport.get())));

    create_effect(move |_| logging::log!("session stage: {:?}", stage.get()));

    let enter_desktop = move |_: ()| {
        if supported.get_untracked() {
            stage.set(SessionStage::Desktop);
        }
    };

    view! {
        <Title text="Portfolio Desktop" />
        <Meta name="description" content="A desktop-style personal portfolio." />

        <main class="site-root">
            <Show when=move || !supported.get() fallback=|| ()>
                <ResolutionNotice minimum viewport />
            </Show>
            <div class="site-stage" hidden=move || !supported.get()>
                {move || match stage.get() {
                    SessionStage::Login => view! { <LoginScreen on_login=enter_desktop /> }.into_view(),
                    SessionStage::Desktop => view! {
                        <DesktopEntry
                            config=config.get_value()
                            supported
                            on_logout=move |_| stage.set(SessionStage::Login)
                        />
                    }
                    .into_view(),
                }}
            </div>
        </main>
    }
}

#[component]
/// Mounts a fresh desktop session over the built-in catalog.
pub fn DesktopEntry(
    config: DesktopConfig,
    /// Site-wide resolution gate; the About dialog is only reachable while it holds.
    #[prop(into)]
    supported: Signal<bool>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let about_open = create_rw_signal(false);

    create_effect(move |_| {
        if !supported.get() {
            about_open.set(false);
        }
    });

    match builtin_catalog() {
        Ok(files) => view! {
            <DesktopProvider files=files config=config>
                <DesktopShell on_about=move |_| about_open.set(true) on_logout=on_logout />
                <Show when=move || about_open.get() && supported.get() fallback=|| ()>
                    <AboutDialog on_close=move |_| about_open.set(false) />
                </Show>
            </DesktopProvider>
        }
        .into_view(),
        Err(err) => {
            logging::error!("file catalog failed to load: {err}");
            view! { <p class="site-error">"The desktop could not be loaded."</p> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_config_parses_with_stock_gate() {
        let config = DesktopConfig::from_json(DESKTOP_CONFIG).expect("bundled config");
        assert_eq!(config.min_supported_viewport, Viewport::new(1280.0, 720.0));
        assert_eq!(site_config(), config);
    }

    #[test]
    fn small_viewport_blocks_every_surface() {
        let config = site_config();
        assert!(!surface_supported(&config, Viewport::new(1024.0, 600.0)));
        assert!(!surface_supported(&config, Viewport::new(1920.0, 719.0)));
        assert!(!surface_supported(&config, Viewport::new(f64::NAN, 1080.0)));
    }

    #[test]
    fn minimum_viewport_admits_login_and_desktop() {
        let config = site_config();
        assert!(surface_supported(&config, Viewport::new(1280.0, 720.0)));
        assert!(surface_supported(&config, config.fallback_viewport));
    }
}

//! Fluent UI System Icon catalog for the desktop shell.
//!
//! Components refer to icons by semantic name only; the SVG markup lives in one place. Paths
//! come from `@fluentui/svg-icons` (regular, 24px).

use leptos::*;
use virtual_fs::FileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Folder node.
    Folder,
    /// Text document node.
    DocumentText,
    /// Project node.
    Code,
    /// Taskbar start glyph.
    Launcher,
    /// About entry in the menu bar.
    Info,
    /// Log-out entry in the menu bar.
    SignOut,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Dismiss/close control.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::DocumentText => "document-text",
            Self::Code => "code",
            Self::Launcher => "launcher",
            Self::Info => "info",
            Self::SignOut => "sign-out",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Folder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Code => {
                r#"<path d="M8.06 6.5a.75.75 0 0 1 .07 1.06L3.98 12l4.15 4.44a.75.75 0 1 1-1.1 1.02l-4.63-4.95a.75.75 0 0 1 0-1.02l4.63-4.95a.75.75 0 0 1 1.06-.04Zm7.88 0a.75.75 0 0 1 1.06.04l4.63 4.95c.27.29.27.74 0 1.02l-4.63 4.95a.75.75 0 1 1-1.1-1.02L20.02 12l-4.15-4.44a.75.75 0 0 1 .07-1.06Z"/>"#
            }
            Self::Launcher => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h2.76L9 20.75V19.5H6.25c-.97 0-1.75-.78-1.75-1.75V8.5h15V9H21V6.26C21 4.45 19.54 3 17.75 3H6.25ZM19.5 7h-15v-.75c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V7Zm-7.25 8.5h3.25v-3.25c0-1.24 1-2.25 2.25-2.25h3c1.24 0 2.25 1 2.25 2.25v7.5c0 1.8-1.46 3.25-3.25 3.25h-7.5C11.01 23 10 22 10 20.75v-3c0-1.24 1-2.25 2.25-2.25ZM17 12.25v3.25h4.5v-3.25a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 0-.75.75Zm-1.5 9.25V17h-3.25a.75.75 0 0 0-.75.75v3c0 .41.34.75.75.75h3.25ZM17 17v4.5h2.75c.97 0 1.75-.78 1.75-1.75V17H17Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm0 7a.75.75 0 0 1 .74.65l.01.1v5.5a.75.75 0 0 1-1.5.1v-5.6a.75.75 0 0 1 .75-.75ZM12 7a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
            }
            Self::SignOut => {
                r#"<path d="M8.5 11.25a.75.75 0 1 1 0 1.5.75.75 0 0 1 0-1.5ZM12 4.35v6.9h7.44l-1.72-1.72a.75.75 0 0 1 1.06-1.06l3 3c.3.3.3.77 0 1.06l-3 3a.75.75 0 0 1-1.06-1.06l1.72-1.72H12v6.65c0 .47-.42.82-.88.74l-8.5-1.5A.75.75 0 0 1 2 17.85V5.85c0-.37.27-.68.63-.74l8.5-1.5c.46-.08.87.27.87.74Zm-1.5.9-7 1.23v10.74l7 1.24V5.25ZM13 18.5h.76c.38 0 .7-.28.74-.65l.01-.1V13.5H13v5Zm.01-8.5V5h.74c.38 0 .7.28.74.65l.01.1V10h-1.5Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 16px (menus, taskbar).
    #[default]
    Sm,
    /// 20px (window chrome).
    Md,
    /// 40px (desktop and folder icons).
    Xl,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Xl => 40,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Xl => "xl",
        }
    }
}

/// Icon shown for a node of `kind` on the desktop, in folder windows, and in the taskbar.
pub const fn icon_for_kind(kind: FileKind) -> IconName {
    match kind {
        FileKind::Folder => IconName::Folder,
        FileKind::Text => IconName::DocumentText,
        FileKind::Project => IconName::Code,
    }
}

#[component]
/// Renders an icon from the shell catalog as inline SVG.
pub fn FluentIcon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

/// Color scheme applied to the login pages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

/// Global theme state
pub static THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

const STORAGE_KEY: &str = "kc_theme";

/// Initialize theme from localStorage or system preference
pub fn init_theme() {
    if let Ok(theme_str) = LocalStorage::get::<String>(STORAGE_KEY) {
        let theme = Theme::from_str(&theme_str);
        *THEME.write() = theme;
        log::info!("Loaded theme from storage: {}", theme.as_str());
    }

    apply_theme();
}

/// Apply theme to document
pub fn apply_theme() {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::window;

        if let Some(win) = window() {
            if let Some(document) = win.document() {
                if let Some(root) = document.document_element() {
                    let dark = match *THEME.read() {
                        Theme::Light => false,
                        Theme::Dark => true,
                        Theme::System => {
                            let media_query = "(prefers-color-scheme: dark)";
                            matches!(win.match_media(media_query), Ok(Some(m)) if m.matches())
                        }
                    };

                    root.set_attribute("class", if dark { "dark" } else { "" }).ok();
                }
            }
        }
    }
}

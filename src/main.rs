#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod context;
mod i18n;
mod pages;
mod stores;
mod utils;

use context::PageContext;
use stores::theme_store;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting kc-theme login pages");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The server injects the page context before the bundle boots, so it is
    // read once here and shared with every screen below.
    use_context_provider(PageContext::from_page);

    use_effect(move || {
        theme_store::init_theme();
    });

    rsx! {
        pages::KcApp {}
    }
}

use dioxus::prelude::*;

use crate::components::Template;
use crate::context::PageContext;
use crate::i18n::{self, MessageKey};

/// Fallback for page ids this theme does not implement. Naming the id makes
/// a misconfigured theme deployment visible instead of silent.
#[component]
pub fn Unsupported(page_id: String) -> Element {
    let ctx = use_context::<PageContext>();
    let lang = i18n::resolve_lang(&ctx.locale.current_language_tag);

    rsx! {
        Template {
            p {
                class: "text-muted-foreground",
                {i18n::msg_str(lang, MessageKey::UnsupportedPage)}
            }
            p {
                class: "mt-2 font-mono text-sm",
                "{page_id}"
            }
        }
    }
}

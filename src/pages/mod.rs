use dioxus::prelude::*;

pub mod terms;
pub mod unsupported;

use terms::Terms;
use unsupported::Unsupported;

use crate::context::PageContext;

/// Dispatch on the page id the server rendered. The identity provider
/// picks the screen, so this is a match rather than a URL router.
#[component]
pub fn KcApp() -> Element {
    let ctx = use_context::<PageContext>();

    match ctx.page_id.as_str() {
        "terms.ftl" => rsx! { Terms {} },
        _ => rsx! { Unsupported { page_id: ctx.page_id.clone() } },
    }
}

use dioxus::prelude::*;

use crate::context::{MessageKind, PageContext};

/// Page chrome shared by every login screen: centered card, optional
/// header node, and the server message banner.
///
/// Screens that manage their own content area pass `display_message: false`
/// so the banner does not compete with what they render themselves.
#[component]
pub fn Template(
    #[props(default = true)] display_message: bool,
    #[props(default = None)] header: Option<Element>,
    children: Element,
) -> Element {
    let ctx = use_context::<PageContext>();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-background px-4 py-12",
            div {
                class: "w-full max-w-2xl bg-card text-card-foreground border border-border rounded-lg shadow-sm p-8",
                if let Some(head) = header {
                    div {
                        class: "mb-6 text-xl font-semibold",
                        {head}
                    }
                }
                if display_message {
                    if let Some(message) = ctx.message.clone() {
                        div {
                            class: "{banner_classes(message.kind)}",
                            "{message.summary}"
                        }
                    }
                }
                {children}
            }
        }
    }
}

fn banner_classes(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => {
            "mb-6 rounded-md border border-green-300 bg-green-50 px-4 py-3 text-sm text-green-900"
        }
        MessageKind::Warning => {
            "mb-6 rounded-md border border-amber-300 bg-amber-50 px-4 py-3 text-sm text-amber-900"
        }
        MessageKind::Error => {
            "mb-6 rounded-md border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-900"
        }
        MessageKind::Info => {
            "mb-6 rounded-md border border-blue-300 bg-blue-50 px-4 py-3 text-sm text-blue-900"
        }
    }
}

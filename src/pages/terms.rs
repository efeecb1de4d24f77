use dioxus::prelude::*;

use crate::components::{MarkdownContent, Template};
use crate::context::{self, PageContext};
use crate::i18n::{self, MessageKey};
use crate::stores::terms_store::{self, TermsState, TERMS};

/// Terms-of-service acceptance screen (`terms.ftl`).
///
/// Nothing is rendered until the document is available; then the rendered
/// markdown and the decline/accept pair appear together. The submit button
/// names `cancel` and `accept` are what the login-action endpoint
/// dispatches on, so they must not change.
#[component]
pub fn Terms() -> Element {
    let ctx = use_context::<PageContext>();
    let lang = i18n::resolve_lang(&ctx.locale.current_language_tag);
    let login_action = ctx.url.login_action.clone();

    // One download per page view; the store ignores re-runs.
    let language_tag = ctx.locale.current_language_tag.clone();
    use_effect(move || {
        terms_store::download_terms(context::terms_source(), language_tag.clone());
    });

    let decline_label = i18n::msg_str(lang, MessageKey::DoDecline);
    let accept_label = i18n::msg_str(lang, MessageKey::DoAccept);

    match TERMS.read().clone() {
        TermsState::Pending | TermsState::Loading => rsx! {},
        TermsState::Failed(_) => rsx! {
            Template {
                display_message: false,
                div {
                    class: "rounded-md border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-900",
                    {i18n::msg_str(lang, MessageKey::TermsLoadFailed)}
                }
                form {
                    class: "form-actions",
                    action: "{login_action}",
                    method: "post",
                    div {
                        class: "mt-8 flex justify-end",
                        button {
                            r#type: "submit",
                            name: "cancel",
                            class: "px-4 py-2 rounded-md border border-border bg-secondary text-secondary-foreground hover:bg-secondary/80",
                            "{decline_label}"
                        }
                    }
                }
            }
        },
        TermsState::Ready(markdown) => rsx! {
            Template {
                display_message: false,
                div {
                    class: "terms-document",
                    MarkdownContent { content: markdown }
                }
                form {
                    class: "form-actions",
                    action: "{login_action}",
                    method: "post",
                    div {
                        class: "mt-8 flex justify-end gap-2",
                        button {
                            r#type: "submit",
                            name: "cancel",
                            class: "px-4 py-2 rounded-md border border-border bg-secondary text-secondary-foreground hover:bg-secondary/80",
                            "{decline_label}"
                        }
                        button {
                            r#type: "submit",
                            name: "accept",
                            autofocus: true,
                            tabindex: "1",
                            class: "px-4 py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90",
                            "{accept_label}"
                        }
                    }
                }
            }
        },
    }
}

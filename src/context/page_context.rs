use serde::Deserialize;

use crate::i18n;
use crate::utils::localized::LocalizedSource;

/// Context object the identity provider injects into the login page as
/// `window.kcContext` before this bundle boots. Read-only for the lifetime
/// of the page view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageContext {
    /// Which screen the server rendered, e.g. "terms.ftl"
    #[serde(rename = "pageId")]
    pub page_id: String,
    pub url: UrlContext,
    #[serde(default)]
    pub locale: LocaleContext,
    /// Server-side message banner, if any
    #[serde(default)]
    pub message: Option<PageMessage>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UrlContext {
    /// Form submission target for the current login-flow step
    #[serde(rename = "loginAction")]
    pub login_action: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocaleContext {
    #[serde(rename = "currentLanguageTag")]
    pub current_language_tag: String,
    #[serde(default)]
    pub supported: Vec<SupportedLocale>,
}

impl Default for LocaleContext {
    fn default() -> Self {
        LocaleContext {
            current_language_tag: i18n::FALLBACK_LANGUAGE_TAG.to_string(),
            supported: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SupportedLocale {
    #[serde(rename = "languageTag")]
    pub language_tag: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub summary: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Warning,
    Error,
    Info,
}

impl PageContext {
    /// Read the injected context. Falls back to a mock so the dev server
    /// and native tests run without a Keycloak in front of them.
    pub fn from_page() -> PageContext {
        #[cfg(target_arch = "wasm32")]
        {
            match read_window_global::<PageContext>("kcContext") {
                Ok(ctx) => return ctx,
                Err(e) => log::warn!("No usable kcContext, using mock page context: {}", e),
            }
        }

        PageContext::mock()
    }

    pub fn mock() -> PageContext {
        PageContext {
            page_id: "terms.ftl".to_string(),
            url: UrlContext {
                login_action: "#".to_string(),
            },
            locale: LocaleContext {
                current_language_tag: "en".to_string(),
                supported: vec![
                    SupportedLocale {
                        language_tag: "en".to_string(),
                        label: "English".to_string(),
                        url: String::new(),
                    },
                    SupportedLocale {
                        language_tag: "fr".to_string(),
                        label: "Français".to_string(),
                        url: String::new(),
                    },
                ],
            },
            message: None,
        }
    }
}

/// Deployment-supplied terms location(s), injected as
/// `window.termsOfService`: a URL string or a per-language map. Owned by
/// the deployment, not by this theme; absent when not configured.
pub fn terms_source() -> Option<LocalizedSource> {
    #[cfg(target_arch = "wasm32")]
    {
        match read_window_global::<LocalizedSource>("termsOfService") {
            Ok(source) => return Some(source),
            Err(e) => log::info!("No terms of service in the page: {}", e),
        }
    }

    None
}

/// Deserialize a JSON value the server attached to `window`.
#[cfg(target_arch = "wasm32")]
fn read_window_global<T: serde::de::DeserializeOwned>(name: &str) -> Result<T, String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| format!("window.{} is not readable", name))?;

    if value.is_undefined() || value.is_null() {
        return Err(format!("window.{} is not set", name));
    }

    let json: String = js_sys::JSON::stringify(&value)
        .map_err(|_| format!("window.{} cannot be serialized", name))?
        .into();

    serde_json::from_str(&json).map_err(|e| format!("window.{} has unexpected shape: {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_terms_page_context() {
        let json = r#"{
            "pageId": "terms.ftl",
            "url": { "loginAction": "https://idp.example.org/login-actions/required-action?execution=TERMS_AND_CONDITIONS" },
            "locale": {
                "currentLanguageTag": "fr",
                "supported": [
                    { "languageTag": "en", "label": "English", "url": "?kc_locale=en" },
                    { "languageTag": "fr", "label": "Français", "url": "?kc_locale=fr" }
                ]
            },
            "message": { "type": "warning", "summary": "You need to agree to continue." }
        }"#;

        let ctx: PageContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.page_id, "terms.ftl");
        assert!(ctx.url.login_action.contains("login-actions"));
        assert_eq!(ctx.locale.current_language_tag, "fr");
        assert_eq!(ctx.locale.supported.len(), 2);
        let message = ctx.message.unwrap();
        assert_eq!(message.kind, MessageKind::Warning);
        assert_eq!(message.summary, "You need to agree to continue.");
    }

    #[test]
    fn test_locale_and_message_are_optional() {
        let json = r##"{ "pageId": "login.ftl", "url": { "loginAction": "#" } }"##;
        let ctx: PageContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.locale.current_language_tag, i18n::FALLBACK_LANGUAGE_TAG);
        assert!(ctx.locale.supported.is_empty());
        assert!(ctx.message.is_none());
    }

    #[test]
    fn test_native_build_uses_mock_context() {
        let ctx = PageContext::from_page();
        assert_eq!(ctx, PageContext::mock());
        assert_eq!(ctx.page_id, "terms.ftl");
    }

    #[test]
    fn test_native_build_has_no_terms_source() {
        assert_eq!(terms_source(), None);
    }
}

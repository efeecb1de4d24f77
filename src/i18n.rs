/// Message catalog for the strings this theme renders itself. The terms
/// document arrives already localized, so only button labels and a few
/// status lines live here.

/// Languages with a shipped catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
    De,
    Es,
}

/// Language tag used when the requested one has no catalog entry. Also the
/// fallback step of the terms-location resolution.
pub const FALLBACK_LANGUAGE_TAG: &str = "en";

impl Lang {
    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Es => "es",
        }
    }

    /// Match a BCP 47-ish tag by its primary subtag ("fr-CA" is French).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            "de" => Some(Lang::De),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }
}

/// Resolve a language tag to a catalog language, falling back to English.
pub fn resolve_lang(tag: &str) -> Lang {
    Lang::from_tag(tag).unwrap_or(Lang::En)
}

/// Keys of the theme's own messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKey {
    DoAccept,
    DoDecline,
    TermsLoadFailed,
    UnsupportedPage,
}

pub fn msg_str(lang: Lang, key: MessageKey) -> &'static str {
    use Lang::*;
    use MessageKey::*;

    match (lang, key) {
        (En, DoAccept) => "Accept",
        (Fr, DoAccept) => "Accepter",
        (De, DoAccept) => "Akzeptieren",
        (Es, DoAccept) => "Aceptar",

        (En, DoDecline) => "Decline",
        (Fr, DoDecline) => "Refuser",
        (De, DoDecline) => "Ablehnen",
        (Es, DoDecline) => "Rechazar",

        (En, TermsLoadFailed) => {
            "The terms of service could not be loaded. Reload the page or try again later."
        }
        (Fr, TermsLoadFailed) => {
            "Les conditions d'utilisation n'ont pas pu être chargées. Rechargez la page ou réessayez plus tard."
        }
        (De, TermsLoadFailed) => {
            "Die Nutzungsbedingungen konnten nicht geladen werden. Laden Sie die Seite neu oder versuchen Sie es später erneut."
        }
        (Es, TermsLoadFailed) => {
            "No se pudieron cargar los términos del servicio. Recargue la página o inténtelo de nuevo más tarde."
        }

        (En, UnsupportedPage) => "This page is not provided by the active login theme.",
        (Fr, UnsupportedPage) => "Cette page n'est pas fournie par le thème de connexion actif.",
        (De, UnsupportedPage) => "Diese Seite wird vom aktiven Anmelde-Theme nicht bereitgestellt.",
        (Es, UnsupportedPage) => "El tema de inicio de sesión activo no proporciona esta página.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_tags_resolve_to_primary_language() {
        assert_eq!(Lang::from_tag("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_tag("fr-FR"), Some(Lang::Fr));
        assert_eq!(Lang::from_tag("de_AT"), Some(Lang::De));
        assert_eq!(Lang::from_tag("ES"), Some(Lang::Es));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(Lang::from_tag("zh"), None);
        assert_eq!(resolve_lang("zh-Hant"), Lang::En);
        assert_eq!(resolve_lang(""), Lang::En);
    }

    #[test]
    fn test_every_language_has_button_labels() {
        for lang in [Lang::En, Lang::Fr, Lang::De, Lang::Es] {
            assert!(!msg_str(lang, MessageKey::DoAccept).is_empty());
            assert!(!msg_str(lang, MessageKey::DoDecline).is_empty());
        }
    }

    #[test]
    fn test_fallback_tag_is_a_catalog_language() {
        assert_eq!(Lang::from_tag(FALLBACK_LANGUAGE_TAG), Some(Lang::En));
    }
}

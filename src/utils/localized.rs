use serde::Deserialize;
use std::collections::HashMap;

/// Terms-of-service location as carried by the deployment configuration:
/// either one location served to every language, or a map keyed by language
/// tag. Supplied from outside the theme and never mutated by it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocalizedSource {
    Single(String),
    PerLanguage(HashMap<String, String>),
}

/// Resolve the document location for a language.
///
/// A missing source resolves to `None` for every input. The map form tries
/// the requested tag, then the fallback tag, then gives up — exactly one
/// fallback step, no ancestor-tag walking.
pub fn resolve_localized(
    source: Option<&LocalizedSource>,
    language_tag: &str,
    fallback_tag: &str,
) -> Option<String> {
    match source? {
        LocalizedSource::Single(location) => Some(location.clone()),
        LocalizedSource::PerLanguage(map) => map
            .get(language_tag)
            .or_else(|| map.get(fallback_tag))
            .cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn per_language(entries: HashMap<String, String>) -> LocalizedSource {
        LocalizedSource::PerLanguage(entries)
    }

    #[test]
    fn test_exact_language_hit() {
        let source = per_language(hashmap! {
            "en".to_string() => "https://example.org/terms-en.md".to_string(),
            "fr".to_string() => "https://example.org/terms-fr.md".to_string(),
        });
        assert_eq!(
            resolve_localized(Some(&source), "en", "en"),
            Some("https://example.org/terms-en.md".to_string())
        );
        assert_eq!(
            resolve_localized(Some(&source), "fr", "en"),
            Some("https://example.org/terms-fr.md".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_fallback_tag() {
        let source = per_language(hashmap! {
            "fr".to_string() => "https://example.org/terms-fr.md".to_string(),
        });
        assert_eq!(
            resolve_localized(Some(&source), "de", "fr"),
            Some("https://example.org/terms-fr.md".to_string())
        );
    }

    #[test]
    fn test_miss_on_both_tags() {
        let source = per_language(hashmap! {
            "fr".to_string() => "https://example.org/terms-fr.md".to_string(),
        });
        assert_eq!(resolve_localized(Some(&source), "de", "en"), None);
    }

    #[test]
    fn test_absent_source_resolves_to_none() {
        assert_eq!(resolve_localized(None, "en", "en"), None);
        assert_eq!(resolve_localized(None, "de", "fr"), None);
    }

    #[test]
    fn test_single_location_ignores_language() {
        let source = LocalizedSource::Single("https://example.org/terms.md".to_string());
        for tag in ["en", "de", "zh"] {
            assert_eq!(
                resolve_localized(Some(&source), tag, "en"),
                Some("https://example.org/terms.md".to_string())
            );
        }
    }

    #[test]
    fn test_deserialize_both_forms() {
        let single: LocalizedSource =
            serde_json::from_str(r#""https://example.org/terms.md""#).unwrap();
        assert_eq!(
            single,
            LocalizedSource::Single("https://example.org/terms.md".to_string())
        );

        let map: LocalizedSource =
            serde_json::from_str(r#"{"en": "https://example.org/terms-en.md"}"#).unwrap();
        assert_eq!(
            resolve_localized(Some(&map), "en", "en"),
            Some("https://example.org/terms-en.md".to_string())
        );
    }
}

use dioxus::prelude::*;

use crate::i18n;
use crate::utils::fetch::fetch_text;
use crate::utils::localized::{resolve_localized, LocalizedSource};

/// Shown in place of the document when no terms location is configured.
/// Downstream deployments match on this wording; keep it byte-identical.
pub const NO_TERMS_CONFIGURED: &str = "There was no terms of service provided in the configuration. Provide it or disable terms as required action in Keycloak";

/// Lifecycle of the terms document for the current page view.
///
/// Replaces the undefined-means-loading convention with states that make
/// the failure path representable, so a broken download renders an error
/// panel instead of leaving the screen blank forever.
#[derive(Clone, Debug, PartialEq)]
pub enum TermsState {
    /// No download started yet
    Pending,

    /// Download in flight
    Loading,

    /// Markdown body ready to render
    Ready(String),

    /// Download failed with an error message
    Failed(String),
}

impl TermsState {
    /// Returns true if no download has been started
    pub fn is_pending(&self) -> bool {
        matches!(self, TermsState::Pending)
    }

    /// Returns true once the slot will not change again for this page view
    pub fn is_settled(&self) -> bool {
        matches!(self, TermsState::Ready(_) | TermsState::Failed(_))
    }
}

/// The single terms-document slot for the page, observed by re-render.
/// Written at most once per page view (see `settle`).
pub static TERMS: GlobalSignal<TermsState> = Signal::global(|| TermsState::Pending);

/// Kick off the one-shot terms download.
///
/// Idempotent: only the first call per page view starts a retrieval, so a
/// remount or a re-run of the calling effect cannot issue a second fetch.
pub fn download_terms(source: Option<LocalizedSource>, language_tag: String) {
    if !TERMS.read().is_pending() {
        return;
    }
    *TERMS.write() = TermsState::Loading;

    spawn(async move {
        let location = resolve_localized(
            source.as_ref(),
            &language_tag,
            i18n::FALLBACK_LANGUAGE_TAG,
        );
        settle(load(location.as_deref()).await);
    });
}

/// Retrieve the terms document body.
///
/// An unconfigured location resolves immediately, without any network call,
/// to a fixed message telling the operator what to fix. The page still
/// renders and decline still works, which beats failing the whole login.
pub async fn load(location: Option<&str>) -> Result<String, String> {
    match location {
        None => Ok(NO_TERMS_CONFIGURED.to_string()),
        Some(url) => {
            log::info!("Downloading terms of service from {}", url);
            fetch_text(url).await
        }
    }
}

/// Write-once settling of the shared slot.
///
/// Only the Loading state accepts a result; anything arriving later (a
/// completion racing a page that already settled) is discarded.
fn settle(result: Result<String, String>) {
    if *TERMS.read() != TermsState::Loading {
        log::warn!("Discarding late terms download result");
        return;
    }
    *TERMS.write() = match result {
        Ok(markdown) => TermsState::Ready(markdown),
        Err(e) => {
            log::error!("Failed to download terms of service: {}", e);
            TermsState::Failed(e)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_unconfigured_terms_use_exact_diagnostic() {
        assert_eq!(
            NO_TERMS_CONFIGURED,
            "There was no terms of service provided in the configuration. \
             Provide it or disable terms as required action in Keycloak"
        );
    }

    #[test]
    fn test_load_without_location_resolves_immediately() {
        // No suspension point on this path, so no network call can happen.
        let body = block_on(load(None)).unwrap();
        assert_eq!(body, NO_TERMS_CONFIGURED);
    }

    #[test]
    fn test_state_phases() {
        assert!(TermsState::Pending.is_pending());
        assert!(!TermsState::Loading.is_pending());
        assert!(!TermsState::Loading.is_settled());
        assert!(TermsState::Ready("ok".to_string()).is_settled());
        assert!(TermsState::Failed("err".to_string()).is_settled());
    }
}

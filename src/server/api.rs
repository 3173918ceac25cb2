//! Typed API responses and the audio-resolution decision.
//!
//! [`resolve_audio`] is the interactive counterpart of the batch job: given
//! a record id it decides, in order, whether to serve an existing asset,
//! synthesize a fresh one, or hand the record back for on-device synthesis.
//! It takes the store, the (optional) TTS client and the asset directory as
//! plain arguments, so the whole decision is testable without an HTTP stack.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::locale;
use crate::store::{PhraseRecord, PhraseStore};
use crate::tts::TtsClient;

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors surfaced by the API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record with the requested id — a 404 to the caller.
    #[error("Language not found")]
    NotFound,

    /// The TTS provider call (or the asset write) failed — a 500 with
    /// `success: false` to the caller.
    #[error("failed to generate audio: {0}")]
    Upstream(String),
}

// ---------------------------------------------------------------------------
// AudioResponse
// ---------------------------------------------------------------------------

/// Response body of `GET /generate-audio/{id}`.
///
/// Exactly one of the three arms is populated:
/// an `audio_url` (asset already on disk, or freshly generated), or
/// `use_browser_synthesis` plus the full record (no credentials configured —
/// the client drives its own speech synthesis).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_browser_synthesis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<PhraseRecord>,
}

impl AudioResponse {
    fn existing(record: &PhraseRecord) -> Self {
        Self {
            success: true,
            message: format!("Audio file already exists for language: {}", record.language_name),
            audio_url: Some(format!("/audio/{}.mp3", record.id)),
            use_browser_synthesis: None,
            language: None,
        }
    }

    fn generated(record: &PhraseRecord) -> Self {
        Self {
            success: true,
            message: format!("Audio generated for language: {}", record.language_name),
            audio_url: Some(format!("/audio/{}.mp3", record.id)),
            use_browser_synthesis: None,
            language: None,
        }
    }

    fn browser_synthesis(record: &PhraseRecord) -> Self {
        Self {
            success: true,
            message: format!(
                "Use browser speech synthesis for language: {}",
                record.language_name
            ),
            audio_url: None,
            use_browser_synthesis: Some(true),
            language: Some(record.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// resolve_audio
// ---------------------------------------------------------------------------

fn asset_exists(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file() && m.len() > 0).unwrap_or(false)
}

/// Decide how the caller should obtain audio for the record `id`.
///
/// Resolution order:
/// 1. Asset `{audio_dir}/{id}.mp3` already on disk → its URL.
/// 2. A TTS client is configured → synthesize, write the asset, return its
///    URL.  Provider or write failure is an [`ApiError::Upstream`].
/// 3. No TTS client (credentials absent) → tell the caller to use on-device
///    synthesis, including the record so it has the phrase and country code.
///    This is routing, not an error.
///
/// # Errors
///
/// - [`ApiError::NotFound`] — unknown id.
/// - [`ApiError::Upstream`] — synthesis was attempted and failed.
pub async fn resolve_audio(
    store: &PhraseStore,
    tts: Option<&dyn TtsClient>,
    audio_dir: &Path,
    id: &str,
) -> Result<AudioResponse, ApiError> {
    let record = store.get(id).map_err(|_| ApiError::NotFound)?;

    let asset = audio_dir.join(format!("{id}.mp3"));
    if asset_exists(&asset) {
        return Ok(AudioResponse::existing(record));
    }

    let Some(client) = tts else {
        log::debug!("no TTS credentials — routing {id} to browser synthesis");
        return Ok(AudioResponse::browser_synthesis(record));
    };

    let tag = locale::resolve(&record.country_code);
    let audio = client
        .synthesize(&record.phrase, tag)
        .await
        .map_err(|e| {
            log::error!("TTS synthesis failed for {id}: {e}");
            ApiError::Upstream(e.to_string())
        })?;

    std::fs::create_dir_all(audio_dir).map_err(|e| ApiError::Upstream(e.to_string()))?;
    std::fs::write(&asset, &audio).map_err(|e| ApiError::Upstream(e.to_string()))?;
    log::info!("audio generated for {id} at {}", asset.display());

    Ok(AudioResponse::generated(record))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::tts::TtsError;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    #[derive(Default)]
    struct CountingTts {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TtsClient for CountingTts {
        async fn synthesize(&self, _phrase: &str, _tag: &str) -> Result<Vec<u8>, TtsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(b"mp3-bytes".to_vec())
        }
    }

    struct FailingTts;

    #[async_trait]
    impl TtsClient for FailingTts {
        async fn synthesize(&self, _phrase: &str, _tag: &str) -> Result<Vec<u8>, TtsError> {
            Err(TtsError::Status(503))
        }
    }

    fn record(id: &str, country_code: &str) -> PhraseRecord {
        PhraseRecord {
            id: id.to_string(),
            country_code: country_code.to_string(),
            language_name: format!("lang-{id}"),
            country: format!("country-{id}"),
            phrase: format!("phrase-{id}"),
            pronunciation: format!("pron-{id}"),
            audio_file: None,
            fun_fact: String::new(),
        }
    }

    fn store() -> PhraseStore {
        PhraseStore::from_records(vec![record("fr", "FR"), record("de", "DE")]).unwrap()
    }

    // -----------------------------------------------------------------------
    // Resolution arms
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = resolve_audio(&store(), None, dir.path(), "zz").await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn existing_asset_returns_its_url_without_synthesis() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("fr.mp3"), b"mp3-bytes").unwrap();

        let tts = Arc::new(CountingTts::default());
        let response = resolve_audio(&store(), Some(tts.as_ref()), dir.path(), "fr")
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.audio_url.as_deref(), Some("/audio/fr.mp3"));
        assert!(response.use_browser_synthesis.is_none());
        assert_eq!(tts.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_credentials_route_to_browser_synthesis() {
        let dir = tempfile::tempdir().expect("temp dir");
        let response = resolve_audio(&store(), None, dir.path(), "fr").await.unwrap();

        assert!(response.success);
        assert_eq!(response.use_browser_synthesis, Some(true));
        assert!(response.audio_url.is_none());
        // The record rides along so the client can synthesize on-device.
        assert_eq!(response.language.as_ref().unwrap().id, "fr");
    }

    #[tokio::test]
    async fn configured_tts_generates_and_persists_the_asset() {
        let dir = tempfile::tempdir().expect("temp dir");
        let tts = Arc::new(CountingTts::default());

        let response = resolve_audio(&store(), Some(tts.as_ref()), dir.path(), "fr")
            .await
            .unwrap();

        assert_eq!(response.audio_url.as_deref(), Some("/audio/fr.mp3"));
        assert_eq!(tts.calls.load(Ordering::SeqCst), 1);
        assert_eq!(std::fs::read(dir.path().join("fr.mp3")).unwrap(), b"mp3-bytes");

        // A second resolution serves the asset written by the first.
        let again = resolve_audio(&store(), Some(tts.as_ref()), dir.path(), "fr")
            .await
            .unwrap();
        assert!(again.message.contains("already exists"));
        assert_eq!(tts.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn provider_failure_is_an_upstream_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = resolve_audio(&store(), Some(&FailingTts), dir.path(), "fr").await;
        assert!(matches!(result, Err(ApiError::Upstream(_))));
        assert!(!dir.path().join("fr.mp3").exists());
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    #[test]
    fn browser_synthesis_response_wire_shape() {
        let r = record("fr", "FR");
        let json = serde_json::to_value(AudioResponse::browser_synthesis(&r)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["useBrowserSynthesis"], true);
        assert!(json.get("audioUrl").is_none());
        assert_eq!(json["language"]["countryCode"], "FR");
    }

    #[test]
    fn audio_url_response_wire_shape() {
        let r = record("fr", "FR");
        let json = serde_json::to_value(AudioResponse::existing(&r)).unwrap();

        assert_eq!(json["audioUrl"], "/audio/fr.mp3");
        assert!(json.get("useBrowserSynthesis").is_none());
        assert!(json.get("language").is_none());
    }
}

//! Core `TtsClient` trait and the `CloudTtsClient` implementation.
//!
//! `CloudTtsClient` speaks the Google-style `text:synthesize` REST wire
//! format: a JSON request naming the text, locale and voice, answered with a
//! base64 `audioContent` field carrying MP3 bytes.  All connection details
//! come from [`TtsConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use thiserror::Error;

use crate::config::TtsConfig;

// ---------------------------------------------------------------------------
// TtsError
// ---------------------------------------------------------------------------

/// Errors that can occur during a synthesis call.
#[derive(Debug, Error)]
pub enum TtsError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("TTS request timed out")]
    Timeout,

    /// The provider answered with a non-success HTTP status.
    #[error("TTS provider returned status {0}")]
    Status(u16),

    /// The response body could not be parsed or decoded.
    #[error("failed to parse TTS response: {0}")]
    Parse(String),

    /// The provider returned a response with no audio in it.
    #[error("TTS provider returned no audio")]
    EmptyAudio,
}

impl From<reqwest::Error> for TtsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TtsError::Timeout
        } else {
            TtsError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// TtsClient trait
// ---------------------------------------------------------------------------

/// Async trait for text-to-speech synthesis backends.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn TtsClient>`).
///
/// # Arguments
/// * `phrase`     – Text to synthesize.
/// * `locale_tag` – BCP-47 tag selecting the voice language (e.g. `"fr-FR"`).
///
/// Returns encoded audio bytes (MP3 for the shipped backend).
#[async_trait]
pub trait TtsClient: Send + Sync {
    async fn synthesize(&self, phrase: &str, locale_tag: &str) -> Result<Vec<u8>, TtsError>;
}

// ---------------------------------------------------------------------------
// CloudTtsClient
// ---------------------------------------------------------------------------

/// Calls a `{base_url}/v1/text:synthesize` REST endpoint.
///
/// The credential is passed as the `key` query parameter, the way Google's
/// public TTS REST surface expects it.  [`CloudTtsClient::from_config`]
/// returns `None` when no credential is available — the caller decides
/// whether that means "fall back to on-device synthesis" (the interactive
/// server) or "refuse to start" (the batch job).
pub struct CloudTtsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    voice_gender: String,
}

impl CloudTtsClient {
    /// Build a `CloudTtsClient` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    ///
    /// Returns `None` when neither the config nor the environment provides
    /// an API key.
    pub fn from_config(config: &TtsConfig) -> Option<Self> {
        let api_key = config.resolved_api_key()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Some(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            voice_gender: config.voice_gender.clone(),
        })
    }
}

#[async_trait]
impl TtsClient for CloudTtsClient {
    /// Send `phrase` to the configured endpoint and return the MP3 bytes.
    async fn synthesize(&self, phrase: &str, locale_tag: &str) -> Result<Vec<u8>, TtsError> {
        let url = format!("{}/v1/text:synthesize", self.base_url);

        let body = serde_json::json!({
            "input":       { "text": phrase },
            "voice":       { "languageCode": locale_tag, "ssmlGender": self.voice_gender },
            "audioConfig": { "audioEncoding": "MP3" }
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TtsError::Status(response.status().as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TtsError::Parse(e.to_string()))?;

        let encoded = json["audioContent"].as_str().ok_or(TtsError::EmptyAudio)?;

        let audio = BASE64
            .decode(encoded)
            .map_err(|e| TtsError::Parse(e.to_string()))?;

        if audio.is_empty() {
            return Err(TtsError::EmptyAudio);
        }

        Ok(audio)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(api_key: Option<&str>) -> TtsConfig {
        TtsConfig {
            base_url: "https://texttospeech.googleapis.com".into(),
            api_key: api_key.map(|s| s.to_string()),
            voice_gender: "NEUTRAL".into(),
            timeout_secs: 10,
        }
    }

    #[test]
    fn from_config_builds_with_a_key() {
        let config = make_config(Some("key-test-1234"));
        assert!(CloudTtsClient::from_config(&config).is_some());
    }

    #[test]
    fn from_config_without_credentials_returns_none() {
        // No config key; the environment variable is absent in the test
        // process unless explicitly exported.
        if std::env::var(crate::config::TTS_API_KEY_ENV).is_ok() {
            return;
        }
        let config = make_config(None);
        assert!(CloudTtsClient::from_config(&config).is_none());
    }

    #[test]
    fn from_config_treats_empty_key_as_absent() {
        if std::env::var(crate::config::TTS_API_KEY_ENV).is_ok() {
            return;
        }
        let config = make_config(Some(""));
        assert!(CloudTtsClient::from_config(&config).is_none());
    }

    /// Verify that `CloudTtsClient` is object-safe (usable as `dyn TtsClient`).
    #[test]
    fn client_is_object_safe() {
        let config = make_config(Some("key-test"));
        let client: Box<dyn TtsClient> =
            Box::new(CloudTtsClient::from_config(&config).unwrap());
        drop(client);
    }

    #[test]
    fn timeout_error_maps_to_timeout_variant() {
        // reqwest::Error construction is private; exercise the From impl via
        // Display on the variants instead.
        assert_eq!(TtsError::Timeout.to_string(), "TTS request timed out");
        assert!(TtsError::Status(429).to_string().contains("429"));
    }
}

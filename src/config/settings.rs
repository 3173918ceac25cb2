//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Environment variable consulted for the TTS credential when the config
/// file carries none.  Its absence is not an error — it routes audio
/// resolution to the browser-synthesis fallback instead.
pub const TTS_API_KEY_ENV: &str = "TTS_API_KEY";

/// Config file read from the working directory.
pub const SETTINGS_FILE: &str = "phrase-atlas.toml";

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

/// Settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// TCP port to listen on.  The `PORT` environment variable overrides
    /// this at startup.
    pub port: u16,
    /// Directory served under the `/images` prefix.
    pub images_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            images_dir: PathBuf::from("images"),
        }
    }
}

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

/// Settings for the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON phrase table loaded at startup.
    pub data_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/languages.json"),
        }
    }
}

// ---------------------------------------------------------------------------
// AudioConfig
// ---------------------------------------------------------------------------

/// Settings for pre-rendered audio assets and their generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Directory holding `{id}.mp3` assets; also served under `/audio`.
    pub dir: PathBuf,
    /// Fixed delay between provider calls during batch generation, in
    /// milliseconds.  Keeps the job under the provider's rate limits.
    pub delay_ms: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("audio"),
            delay_ms: 500,
        }
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for the cloud text-to-speech provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Base URL of the `text:synthesize` REST endpoint.
    pub base_url: String,
    /// API key — `None` means "read [`TTS_API_KEY_ENV`] instead".
    pub api_key: Option<String>,
    /// Voice gender requested from the provider (`NEUTRAL`, `FEMALE`, `MALE`).
    pub voice_gender: String,
    /// Maximum seconds to wait for a synthesis response before timing out.
    pub timeout_secs: u64,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://texttospeech.googleapis.com".into(),
            api_key: None,
            voice_gender: "NEUTRAL".into(),
            timeout_secs: 10,
        }
    }
}

impl TtsConfig {
    /// The credential to use: the configured key when non-empty, otherwise
    /// the [`TTS_API_KEY_ENV`] environment variable.
    pub fn resolved_api_key(&self) -> Option<String> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Some(key.to_string()),
            _ => std::env::var(TTS_API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty()),
        }
    }

    /// Whether server-side audio generation should be attempted at all.
    pub fn is_configured(&self) -> bool {
        self.resolved_api_key().is_some()
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `phrase-atlas.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use phrase_atlas::config::AppConfig;
///
/// // Load (returns Default when the file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP service settings.
    pub server: ServerConfig,
    /// Content store settings.
    pub store: StoreConfig,
    /// Pre-rendered audio settings.
    pub audio: AudioConfig,
    /// Cloud TTS provider settings.
    pub tts: TtsConfig,
}

impl AppConfig {
    /// Load configuration from `phrase-atlas.toml` in the working directory.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(std::path::Path::new(SETTINGS_FILE))
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` survives a TOML round trip.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("phrase-atlas.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.store.data_file, PathBuf::from("data/languages.json"));
        assert_eq!(cfg.audio.dir, PathBuf::from("audio"));
        assert_eq!(cfg.audio.delay_ms, 500);
        assert_eq!(cfg.tts.base_url, "https://texttospeech.googleapis.com");
        assert!(cfg.tts.api_key.is_none());
        assert_eq!(cfg.tts.voice_gender, "NEUTRAL");
        assert_eq!(cfg.tts.timeout_secs, 10);
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.server.port = 8080;
        cfg.store.data_file = PathBuf::from("alt/table.json");
        cfg.audio.delay_ms = 1_000;
        cfg.tts.api_key = Some("key-test".into());
        cfg.tts.timeout_secs = 30;

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.server.port, 8080);
        assert_eq!(loaded.store.data_file, PathBuf::from("alt/table.json"));
        assert_eq!(loaded.audio.delay_ms, 1_000);
        assert_eq!(loaded.tts.api_key, Some("key-test".into()));
        assert_eq!(loaded.tts.timeout_secs, 30);
    }

    #[test]
    fn configured_key_wins_over_environment() {
        let cfg = TtsConfig {
            api_key: Some("from-config".into()),
            ..TtsConfig::default()
        };
        assert_eq!(cfg.resolved_api_key().as_deref(), Some("from-config"));
        assert!(cfg.is_configured());
    }

    #[test]
    fn empty_configured_key_counts_as_absent() {
        let cfg = TtsConfig {
            api_key: Some(String::new()),
            ..TtsConfig::default()
        };
        // Falls through to the environment, which the test does not set;
        // either way the empty string must not be treated as a credential.
        assert_ne!(cfg.resolved_api_key().as_deref(), Some(""));
    }
}

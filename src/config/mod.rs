//! Configuration module for phrase-atlas.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each
//! subsystem, and TOML persistence via `AppConfig::load` /
//! `AppConfig::save_to`.  Credentials may come from the environment; see
//! [`TTS_API_KEY_ENV`].

pub mod settings;

pub use settings::{
    AppConfig, AudioConfig, ServerConfig, StoreConfig, TtsConfig, SETTINGS_FILE, TTS_API_KEY_ENV,
};

//! Text-to-speech module — the cloud provider seam and batch generation.
//!
//! This module provides:
//! * [`TtsClient`] — async trait implemented by all synthesis backends.
//! * [`CloudTtsClient`] — REST `text:synthesize` client (production backend).
//! * [`AudioGenerator`] — sequential, rate-limited batch job that writes
//!   pre-rendered assets keyed by record id.
//! * [`TtsError`] / [`GenerateError`] — error variants.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use phrase_atlas::config::AppConfig;
//! use phrase_atlas::store::PhraseStore;
//! use phrase_atlas::tts::{AudioGenerator, CloudTtsClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let store = PhraseStore::load(&config.store.data_file).unwrap();
//!
//!     let client = CloudTtsClient::from_config(&config.tts)
//!         .expect("TTS credentials not configured");
//!
//!     let generator = AudioGenerator::new(
//!         Arc::new(client),
//!         &config.audio.dir,
//!         Duration::from_millis(config.audio.delay_ms),
//!     );
//!
//!     let report = generator.generate_all(store.all()).await;
//!     println!("generated {}, skipped {}, failed {}",
//!              report.generated, report.skipped, report.failed);
//! }
//! ```

pub mod client;
pub mod pregen;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{CloudTtsClient, TtsClient, TtsError};
pub use pregen::{AudioGenerator, GenerateError, GenerateOutcome, GenerationReport};

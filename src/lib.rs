//! phrase-atlas — localized-phrase content service with audio playback.
//!
//! The crate has two halves, both thin by design:
//!
//! * **Content**: [`store::PhraseStore`] loads the phrase table once at
//!   startup and serves lookups; [`server`] exposes it over HTTP together
//!   with the audio-resolution endpoint and static asset mounts.
//! * **Audio**: [`playback::PlaybackSession`] models the per-client
//!   play/stop flow (pre-rendered clip first, speech synthesis as
//!   fallback); [`tts::AudioGenerator`] pre-renders assets in batch through
//!   the [`tts::TtsClient`] provider seam; [`locale::resolve`] picks the
//!   synthesis voice for a country code.
//!
//! Binaries: `phrase-atlas` (the service) and `pregen_audio` (the batch
//! job).  Both read `phrase-atlas.toml` via [`config::AppConfig`].

pub mod config;
pub mod locale;
pub mod playback;
pub mod server;
pub mod store;
pub mod tts;

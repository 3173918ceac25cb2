//! Playback module — the play/stop session and its pluggable sources.
//!
//! This module provides:
//! * [`PlaybackSession`] — the per-session state machine (`Idle`/`Playing`,
//!   toggle semantics, clip → synthesis fallback).
//! * [`ClipPlayer`] / [`SpeechSynthesis`] — source traits the session drives.
//! * [`AssetClipPlayer`] — filesystem-backed clip source.
//! * [`NoSynthesis`] — synthesis stub for environments without a voice.
//! * [`PlaybackError`] / [`SourceError`] — error variants.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use phrase_atlas::playback::{AssetClipPlayer, NoSynthesis, PlaybackSession};
//! use phrase_atlas::store::PhraseStore;
//!
//! let store = PhraseStore::load("data/languages.json").unwrap();
//! let mut session = PlaybackSession::new(
//!     Arc::new(AssetClipPlayer::new("audio")),
//!     Arc::new(NoSynthesis),
//! );
//!
//! let record = store.get("fr").unwrap();
//! session.play(record).unwrap();   // starts the pre-rendered clip
//! session.play(record).unwrap();   // pressing play again stops it
//! assert!(!session.is_playing());
//! ```

pub mod session;
pub mod source;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use session::{PlaybackError, PlaybackMode, PlaybackSession, PlayOutcome, SessionState};
pub use source::{AssetClipPlayer, ClipPlayer, NoSynthesis, SourceError, SpeechSynthesis};

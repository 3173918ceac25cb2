//! The playback session state machine.
//!
//! One [`PlaybackSession`] exists per client context and owns the only
//! mutable playback state — there are no ambient globals.  The transitions
//! are:
//!
//! ```text
//! Idle ──play(r): clip ok────────────▶ Playing(Clip)      current = r
//! Idle ──play(r): clip fails,
//!         synthesis ok──────────────▶ Playing(Synthesis)  current = r
//! Idle ──play(r): synthesis
//!         unsupported/fails─────────▶ Idle  (error surfaced)
//! Playing ──play(_)─────────────────▶ Idle  (toggle: stop, not switch)
//! Playing ──stop()──────────────────▶ Idle
//! Playing ──finished()──────────────▶ Idle  (natural completion)
//! ```
//!
//! The session never plays more than one thing at a time; toggle semantics
//! enforce the single outstanding request, no locking required.

use std::sync::Arc;

use thiserror::Error;

use crate::locale;
use crate::playback::source::{ClipPlayer, SourceError, SpeechSynthesis};
use crate::store::PhraseRecord;

// ---------------------------------------------------------------------------
// PlaybackMode / SessionState
// ---------------------------------------------------------------------------

/// Which source is producing audio while the session is `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// A pre-rendered asset is playing.
    Clip,
    /// An on-device synthesis utterance is in flight.
    Synthesis,
}

/// States of the playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing is playing; no record is bound.
    #[default]
    Idle,
    /// One source is active; `current_record` is bound.
    Playing(PlaybackMode),
}

impl SessionState {
    /// Returns `true` while either playback mode is active.
    pub fn is_playing(&self) -> bool {
        matches!(self, SessionState::Playing(_))
    }

    /// A short human-readable label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Playing(PlaybackMode::Clip) => "Playing (clip)",
            SessionState::Playing(PlaybackMode::Synthesis) => "Playing (synthesis)",
        }
    }
}

// ---------------------------------------------------------------------------
// PlayOutcome / PlaybackError
// ---------------------------------------------------------------------------

/// What a `play` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback began with the given mode.
    Started(PlaybackMode),
    /// The session was already playing; the press was treated as stop.
    Stopped,
}

/// Errors surfaced by [`PlaybackSession::play`].  The session is `Idle`
/// after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// No synthesis capability exists and the clip was not playable.
    #[error("speech synthesis is not supported in this environment")]
    Unsupported,

    /// Synthesis is supported but the utterance failed to start.
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
}

// ---------------------------------------------------------------------------
// PlaybackSession
// ---------------------------------------------------------------------------

/// Per-session playback state machine over a clip source and a synthesis
/// source.
///
/// Sources are tried in order on each play request: the pre-rendered clip
/// first, then synthesis with the record's resolved locale tag.  A clip
/// failure falls through silently (logged, not surfaced); only a missing
/// synthesis capability reaches the caller.
pub struct PlaybackSession {
    clip: Arc<dyn ClipPlayer>,
    synth: Arc<dyn SpeechSynthesis>,
    state: SessionState,
    current: Option<PhraseRecord>,
}

impl PlaybackSession {
    pub fn new(clip: Arc<dyn ClipPlayer>, synth: Arc<dyn SpeechSynthesis>) -> Self {
        Self {
            clip,
            synth,
            state: SessionState::Idle,
            current: None,
        }
    }

    /// Current state of the session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` while either playback mode is active.
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// The record bound to the active playback, or `None` when `Idle`.
    pub fn current_record(&self) -> Option<&PhraseRecord> {
        self.current.as_ref()
    }

    /// Handle a play request for `record`.
    ///
    /// When `Idle`, attempts the clip source then synthesis; the first
    /// success transitions to `Playing` and binds the record.  When already
    /// `Playing`, the press is a stop request — the session halts and
    /// returns [`PlayOutcome::Stopped`] regardless of which record was
    /// passed (toggle semantics, never a mid-flight switch).
    ///
    /// # Errors
    ///
    /// - [`PlaybackError::Unsupported`] — clip unplayable and no synthesis
    ///   capability exists.
    /// - [`PlaybackError::Synthesis`] — synthesis exists but failed to start.
    pub fn play(&mut self, record: &PhraseRecord) -> Result<PlayOutcome, PlaybackError> {
        if self.state.is_playing() {
            self.stop();
            return Ok(PlayOutcome::Stopped);
        }

        match self.clip.start(record) {
            Ok(()) => {
                self.state = SessionState::Playing(PlaybackMode::Clip);
                self.current = Some(record.clone());
                return Ok(PlayOutcome::Started(PlaybackMode::Clip));
            }
            Err(e) => {
                log::warn!(
                    "clip source failed for '{}' ({e}) — falling back to synthesis",
                    record.id
                );
            }
        }

        let tag = locale::resolve(&record.country_code);
        match self.synth.speak(&record.phrase, tag) {
            Ok(()) => {
                self.state = SessionState::Playing(PlaybackMode::Synthesis);
                self.current = Some(record.clone());
                Ok(PlayOutcome::Started(PlaybackMode::Synthesis))
            }
            Err(SourceError::Unsupported) => Err(PlaybackError::Unsupported),
            Err(SourceError::Failed(msg)) => Err(PlaybackError::Synthesis(msg)),
        }
    }

    /// Halt whichever mode is active and return to `Idle`, clearing the
    /// bound record.  Safe to call when already `Idle`.
    pub fn stop(&mut self) {
        match self.state {
            SessionState::Playing(PlaybackMode::Clip) => self.clip.halt(),
            SessionState::Playing(PlaybackMode::Synthesis) => self.synth.cancel(),
            SessionState::Idle => {}
        }
        self.state = SessionState::Idle;
        self.current = None;
    }

    /// Notification that the active playback completed on its own (asset
    /// ended / utterance finished).  Returns to `Idle` without touching the
    /// sources.
    pub fn finished(&mut self) {
        self.state = SessionState::Idle;
        self.current = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

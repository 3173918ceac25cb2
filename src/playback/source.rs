//! Playback source traits and the shipped implementations.
//!
//! A [`PlaybackSession`](crate::playback::PlaybackSession) never talks to an
//! audio device itself — it drives two seams:
//!
//! * [`ClipPlayer`] — plays a pre-rendered asset for a record.
//! * [`SpeechSynthesis`] — speaks a phrase with an on-device voice.
//!
//! Both are object-safe and `Send + Sync` so they can be held behind
//! `Arc<dyn …>` and swapped for test doubles.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::PhraseRecord;

// ---------------------------------------------------------------------------
// SourceError
// ---------------------------------------------------------------------------

/// Errors a playback source can report to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source exists but could not start (asset missing, device busy,
    /// synthesis engine error, …).  The session treats this as "try the
    /// next source".
    #[error("playback source failed: {0}")]
    Failed(String),

    /// The runtime environment has no synthesis capability at all.
    #[error("speech synthesis is not supported in this environment")]
    Unsupported,
}

// ---------------------------------------------------------------------------
// ClipPlayer trait
// ---------------------------------------------------------------------------

/// Starts and halts playback of a record's pre-rendered audio asset.
///
/// `start` must fail with [`SourceError::Failed`] when the asset for the
/// record is absent or unplayable, so the session can fall through to
/// synthesis within the same play request.
pub trait ClipPlayer: Send + Sync {
    /// Begin playing the pre-rendered clip for `record`.
    fn start(&self, record: &PhraseRecord) -> Result<(), SourceError>;

    /// Halt clip playback (pause and rewind).  Must be safe to call when
    /// nothing is playing.
    fn halt(&self);
}

// ---------------------------------------------------------------------------
// SpeechSynthesis trait
// ---------------------------------------------------------------------------

/// Speaks a phrase with an on-device voice.
///
/// `speak` must fail with [`SourceError::Unsupported`] when the environment
/// has no synthesis capability; the session surfaces that to the caller
/// instead of swallowing it.
pub trait SpeechSynthesis: Send + Sync {
    /// Begin speaking `phrase` using the voice selected by `locale_tag`
    /// (e.g. `"fr-FR"`).
    fn speak(&self, phrase: &str, locale_tag: &str) -> Result<(), SourceError>;

    /// Cancel any in-flight utterance.  Must be safe to call when nothing is
    /// being spoken.
    fn cancel(&self);
}

// Compile-time assertion: both seams must stay object-safe.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn ClipPlayer>, _: Box<dyn SpeechSynthesis>) {}
};

// ---------------------------------------------------------------------------
// AssetClipPlayer
// ---------------------------------------------------------------------------

/// Filesystem-backed [`ClipPlayer`].
///
/// Resolves `{audio_dir}/{record.id}.mp3` and starts only when that asset is
/// present and non-empty.  The actual audio sink belongs to the embedding
/// environment; this player is the reachability check the session needs to
/// pick the clip arm over synthesis.
pub struct AssetClipPlayer {
    audio_dir: PathBuf,
}

impl AssetClipPlayer {
    pub fn new(audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            audio_dir: audio_dir.into(),
        }
    }

    /// Path the pre-rendered asset for `id` is expected at.
    pub fn asset_path(&self, id: &str) -> PathBuf {
        self.audio_dir.join(format!("{id}.mp3"))
    }
}

impl ClipPlayer for AssetClipPlayer {
    fn start(&self, record: &PhraseRecord) -> Result<(), SourceError> {
        let path = self.asset_path(&record.id);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
            Ok(_) => Err(SourceError::Failed(format!(
                "asset is empty: {}",
                path.display()
            ))),
            Err(e) => Err(SourceError::Failed(format!(
                "asset unreachable: {}: {e}",
                path.display()
            ))),
        }
    }

    fn halt(&self) {}
}

// ---------------------------------------------------------------------------
// NoSynthesis
// ---------------------------------------------------------------------------

/// A [`SpeechSynthesis`] for environments with no voice at all — every
/// `speak` reports [`SourceError::Unsupported`].
pub struct NoSynthesis;

impl SpeechSynthesis for NoSynthesis {
    fn speak(&self, _phrase: &str, _locale_tag: &str) -> Result<(), SourceError> {
        Err(SourceError::Unsupported)
    }

    fn cancel(&self) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> PhraseRecord {
        PhraseRecord {
            id: id.to_string(),
            country_code: "FR".into(),
            language_name: "French".into(),
            country: "France".into(),
            phrase: "Va te faire foutre".into(),
            pronunciation: "va tuh fair foo-truh".into(),
            audio_file: None,
            fun_fact: String::new(),
        }
    }

    // --- AssetClipPlayer ---

    #[test]
    fn start_succeeds_when_asset_exists() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("fr.mp3"), b"mp3-bytes").unwrap();

        let player = AssetClipPlayer::new(dir.path());
        assert!(player.start(&record("fr")).is_ok());
    }

    #[test]
    fn start_fails_when_asset_is_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let player = AssetClipPlayer::new(dir.path());
        let err = player.start(&record("fr")).unwrap_err();
        assert!(matches!(err, SourceError::Failed(_)));
    }

    #[test]
    fn start_fails_when_asset_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("fr.mp3"), b"").unwrap();

        let player = AssetClipPlayer::new(dir.path());
        let err = player.start(&record("fr")).unwrap_err();
        assert!(matches!(err, SourceError::Failed(ref msg) if msg.contains("empty")));
    }

    #[test]
    fn asset_path_is_keyed_by_record_id() {
        let player = AssetClipPlayer::new("audio");
        assert_eq!(player.asset_path("fr"), PathBuf::from("audio/fr.mp3"));
    }

    #[test]
    fn halt_without_playback_is_a_no_op() {
        let player = AssetClipPlayer::new("audio");
        player.halt();
    }

    // --- NoSynthesis ---

    #[test]
    fn no_synthesis_reports_unsupported() {
        let synth = NoSynthesis;
        let err = synth.speak("bonjour", "fr-FR").unwrap_err();
        assert_eq!(err, SourceError::Unsupported);
    }

    #[test]
    fn no_synthesis_cancel_is_a_no_op() {
        NoSynthesis.cancel();
    }
}

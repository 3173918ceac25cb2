//! Batch audio pre-generation.
//!
//! [`AudioGenerator`] walks the phrase table strictly sequentially, writing
//! one `{id}.mp3` asset per record.  Records whose asset already exists are
//! skipped without touching the network, so a rerun after a partial failure
//! only pays for the records that are still missing.  A fixed delay between
//! provider calls keeps the job under external rate limits.
//!
//! Per-record failures are logged and counted — never retried within a run,
//! and never fatal to the rest of the batch.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::locale;
use crate::store::PhraseRecord;
use crate::tts::client::{TtsClient, TtsError};

// ---------------------------------------------------------------------------
// GenerateError / GenerateOutcome / GenerationReport
// ---------------------------------------------------------------------------

/// Errors from generating a single record's asset.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The provider call failed.
    #[error(transparent)]
    Synthesis(#[from] TtsError),

    /// The synthesized audio could not be written to disk.
    #[error("failed to write asset: {0}")]
    Io(#[from] std::io::Error),
}

/// What [`AudioGenerator::generate`] did for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A fresh asset was synthesized and written to the given path.
    Written(PathBuf),
    /// The asset already existed; no provider call was made.
    Skipped(PathBuf),
}

/// Per-run counters reported by [`AudioGenerator::generate_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Records whose asset was freshly synthesized.
    pub generated: usize,
    /// Records whose asset already existed.
    pub skipped: usize,
    /// Records whose provider call or disk write failed.
    pub failed: usize,
}

impl GenerationReport {
    /// Total records processed.
    pub fn total(&self) -> usize {
        self.generated + self.skipped + self.failed
    }
}

// ---------------------------------------------------------------------------
// AudioGenerator
// ---------------------------------------------------------------------------

/// Sequential, rate-limited batch generator of pre-rendered audio assets.
pub struct AudioGenerator {
    client: Arc<dyn TtsClient>,
    audio_dir: PathBuf,
    delay: Duration,
}

impl AudioGenerator {
    pub fn new(client: Arc<dyn TtsClient>, audio_dir: impl Into<PathBuf>, delay: Duration) -> Self {
        Self {
            client,
            audio_dir: audio_dir.into(),
            delay,
        }
    }

    /// Path the asset for `id` is written to.
    pub fn asset_path(&self, id: &str) -> PathBuf {
        self.audio_dir.join(format!("{id}.mp3"))
    }

    fn asset_exists(path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_file() && m.len() > 0).unwrap_or(false)
    }

    /// Generate the asset for one record.
    ///
    /// Idempotent: when the asset already exists (and is non-empty) the
    /// provider is not called and [`GenerateOutcome::Skipped`] is returned.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::Synthesis`] — the provider call failed.
    /// - [`GenerateError::Io`] — the asset could not be written.
    pub async fn generate(&self, record: &PhraseRecord) -> Result<GenerateOutcome, GenerateError> {
        let path = self.asset_path(&record.id);

        if Self::asset_exists(&path) {
            return Ok(GenerateOutcome::Skipped(path));
        }

        let tag = locale::resolve(&record.country_code);
        log::info!(
            "generating audio for {} ({tag}): \"{}\"",
            record.language_name,
            record.phrase
        );

        let audio = self.client.synthesize(&record.phrase, tag).await?;

        std::fs::create_dir_all(&self.audio_dir)?;
        std::fs::write(&path, &audio)?;
        log::info!("audio saved to {}", path.display());

        Ok(GenerateOutcome::Written(path))
    }

    /// Generate assets for every record, strictly in table order.
    ///
    /// Failures are logged and counted; the run continues to the next
    /// record.  The configured delay is applied after each provider call
    /// (skipped records cost nothing, so they do not pace).
    pub async fn generate_all(&self, records: &[PhraseRecord]) -> GenerationReport {
        let mut report = GenerationReport::default();

        for record in records {
            match self.generate(record).await {
                Ok(GenerateOutcome::Skipped(path)) => {
                    log::debug!("skipping {} — asset exists at {}", record.id, path.display());
                    report.skipped += 1;
                    continue;
                }
                Ok(GenerateOutcome::Written(_)) => {
                    report.generated += 1;
                }
                Err(e) => {
                    log::error!("audio generation failed for {}: {e}", record.id);
                    report.failed += 1;
                }
            }

            tokio::time::sleep(self.delay).await;
        }

        report
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Batch entry point — pre-generate audio assets for every phrase record.
//!
//! Refuses to start without TTS credentials (config `api_key` or the
//! `TTS_API_KEY` environment variable); there is nothing useful the job can
//! do without them.  Records whose asset already exists are skipped, so the
//! job is safe to rerun after partial failures.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use phrase_atlas::config::{AppConfig, TTS_API_KEY_ENV};
use phrase_atlas::store::PhraseStore;
use phrase_atlas::tts::{AudioGenerator, CloudTtsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    let Some(client) = CloudTtsClient::from_config(&config.tts) else {
        log::error!(
            "TTS credentials not configured — set tts.api_key in phrase-atlas.toml \
             or export {TTS_API_KEY_ENV}"
        );
        std::process::exit(1);
    };

    let store = PhraseStore::load(&config.store.data_file).with_context(|| {
        format!(
            "failed to load phrase table from {}",
            config.store.data_file.display()
        )
    })?;

    log::info!("starting audio generation for {} languages", store.len());

    let generator = AudioGenerator::new(
        Arc::new(client),
        &config.audio.dir,
        Duration::from_millis(config.audio.delay_ms),
    );

    let report = generator.generate_all(store.all()).await;

    log::info!(
        "audio generation complete — generated: {}, skipped: {}, failed: {}",
        report.generated,
        report.skipped,
        report.failed
    );

    Ok(())
}

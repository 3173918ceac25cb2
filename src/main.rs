//! Service entry point — phrase-atlas.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the phrase table — the only failure that is fatal.
//! 4. Build the TTS client when credentials are configured; otherwise the
//!    audio endpoint routes callers to on-device synthesis.
//! 5. Bind the listener (`PORT` env overrides the configured port) and
//!    serve until ctrl-c.

use std::sync::Arc;

use anyhow::Context;

use phrase_atlas::config::AppConfig;
use phrase_atlas::server::{router, ServerState};
use phrase_atlas::store::PhraseStore;
use phrase_atlas::tts::{CloudTtsClient, TtsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("phrase-atlas starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Content store — fatal if the table cannot be loaded.
    let store = PhraseStore::load(&config.store.data_file).with_context(|| {
        format!(
            "failed to load phrase table from {}",
            config.store.data_file.display()
        )
    })?;
    log::info!(
        "loaded {} phrase records from {}",
        store.len(),
        config.store.data_file.display()
    );

    // 4. TTS client — optional; absence routes to browser synthesis.
    let tts: Option<Arc<dyn TtsClient>> = match CloudTtsClient::from_config(&config.tts) {
        Some(client) => {
            log::info!("TTS credentials found — server-side generation enabled");
            Some(Arc::new(client))
        }
        None => {
            log::info!("no TTS credentials — audio requests fall back to browser synthesis");
            None
        }
    };

    let state = ServerState {
        store: Arc::new(store),
        tts,
        audio_dir: config.audio.dir.clone(),
        images_dir: config.server.images_dir.clone(),
    };

    // 5. Bind and serve.  PORT env overrides the config file.
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;
    log::info!("server running at http://localhost:{port}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log::info!("server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for shutdown signal: {e}");
    }
}

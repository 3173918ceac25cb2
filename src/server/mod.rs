//! HTTP service module.
//!
//! This module provides:
//! * [`resolve_audio`] — the audio-resolution decision (asset → generate →
//!   browser synthesis), free of any HTTP types so it is unit-testable.
//! * [`AudioResponse`] / [`ApiError`] — the typed API surface.
//! * [`ServerState`] / [`router`] — the axum wiring: content routes plus the
//!   static `/audio` and `/images` mounts.
//!
//! Route map:
//!
//! ```text
//! GET /languages             → full phrase table as a JSON array
//! GET /languages/{id}        → one record, or 404
//! GET /generate-audio/{id}   → { success, message, audioUrl | useBrowserSynthesis … }
//! GET /audio/…  /images/…    → static assets
//! ```

pub mod api;
pub mod routes;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use api::{resolve_audio, ApiError, AudioResponse};
pub use routes::{router, ServerState};

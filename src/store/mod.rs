//! Content store module — the phrase table.
//!
//! This module provides:
//! * [`PhraseRecord`] — one country/language entry (phrase + metadata).
//! * [`PhraseStore`] — the immutable, load-once table keyed by record id.
//! * [`StoreError`] — error variants for store operations.
//!
//! The table is a plain JSON array on disk (`data/languages.json`), loaded
//! exactly once at startup.  There is no runtime mutation; every handler and
//! the pre-generation job share one [`PhraseStore`] behind an `Arc`.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use phrase_atlas::store::PhraseStore;
//!
//! let store = PhraseStore::load("data/languages.json").expect("phrase table");
//!
//! let record = store.get("fr").unwrap();
//! println!("{}: {}", record.language_name, record.phrase);
//! ```

pub mod record;
pub mod table;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use record::PhraseRecord;
pub use table::{PhraseStore, StoreError};

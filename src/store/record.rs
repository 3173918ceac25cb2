//! The [`PhraseRecord`] type — one entry in the phrase table.
//!
//! Records are serialised with camelCase field names (`countryCode`,
//! `languageName`, …) because that is the wire shape both the JSON table on
//! disk and every API consumer use.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PhraseRecord
// ---------------------------------------------------------------------------

/// One country/language entry: the phrase, how to say it, and where its
/// pre-rendered audio lives (if anywhere).
///
/// Records are immutable once loaded.  `id` is the unique lookup key across
/// the whole table; [`PhraseStore`](crate::store::PhraseStore) enforces
/// uniqueness at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseRecord {
    /// Unique string key (e.g. `"fr"`).
    pub id: String,

    /// ISO-like 2-letter country code (e.g. `"FR"`).  Resolved to a speech
    /// locale tag by [`locale::resolve`](crate::locale::resolve).
    pub country_code: String,

    /// Display name of the language (e.g. `"French"`).
    pub language_name: String,

    /// Display name of the country (e.g. `"France"`).
    pub country: String,

    /// The phrase itself, in the target language/script.
    pub phrase: String,

    /// Romanised pronunciation guide.
    pub pronunciation: String,

    /// Relative URL of the pre-rendered audio asset, when one has been
    /// generated (e.g. `"audio/fr.mp3"`).  `None` until the batch job has
    /// produced it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,

    /// A short fun fact shown alongside the phrase.
    pub fun_fact: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "fr",
            "countryCode": "FR",
            "languageName": "French",
            "country": "France",
            "phrase": "Va te faire foutre",
            "pronunciation": "va tuh fair foo-truh",
            "audioFile": "audio/fr.mp3",
            "funFact": "French has an entire register of insults built on 'foutre'."
        }"#
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let record: PhraseRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.id, "fr");
        assert_eq!(record.country_code, "FR");
        assert_eq!(record.language_name, "French");
        assert_eq!(record.phrase, "Va te faire foutre");
        assert_eq!(record.audio_file.as_deref(), Some("audio/fr.mp3"));
    }

    #[test]
    fn audio_file_defaults_to_none() {
        let json = r#"{
            "id": "xx",
            "countryCode": "XX",
            "languageName": "Test",
            "country": "Testland",
            "phrase": "hello",
            "pronunciation": "heh-loh",
            "funFact": "none"
        }"#;
        let record: PhraseRecord = serde_json::from_str(json).unwrap();
        assert!(record.audio_file.is_none());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let record: PhraseRecord = serde_json::from_str(sample_json()).unwrap();
        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"countryCode\""));
        assert!(out.contains("\"languageName\""));
        assert!(out.contains("\"funFact\""));
        assert!(!out.contains("country_code"));
    }

    #[test]
    fn none_audio_file_is_omitted_from_output() {
        let mut record: PhraseRecord = serde_json::from_str(sample_json()).unwrap();
        record.audio_file = None;
        let out = serde_json::to_string(&record).unwrap();
        assert!(!out.contains("audioFile"));
    }
}

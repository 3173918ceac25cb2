//! Locale tag resolution — country code → speech synthesis locale.
//!
//! [`resolve`] maps an ISO-like 2-letter country code to the BCP-47 tag a
//! speech synthesizer should use for that country's phrase.  The mapping is
//! a compile-time [`phf`] table; unknown codes fall back to
//! [`FALLBACK_TAG`] so every caller always gets a playable result.  That
//! fallback is policy, not an error path.

// ---------------------------------------------------------------------------
// Static table
// ---------------------------------------------------------------------------

/// Tag returned for any country code not present in the table.
pub const FALLBACK_TAG: &str = "en-US";

static LOCALE_TAGS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "US" => "en-US",
    "GB" => "en-GB",
    "ES" => "es-ES",
    "FR" => "fr-FR",
    "DE" => "de-DE",
    "IT" => "it-IT",
    "PT" => "pt-PT",
    "RU" => "ru-RU",
    "JP" => "ja-JP",
    "CN" => "zh-CN",
    "KR" => "ko-KR",
    "SA" => "ar-SA",
    "IN" => "hi-IN",
    "TR" => "tr-TR",
    "NL" => "nl-NL",
    "SE" => "sv-SE",
    "PL" => "pl-PL",
    "GR" => "el-GR",
    "IL" => "he-IL",
    "TH" => "th-TH",
    "VN" => "vi-VN",
    "NO" => "nb-NO",
    "FI" => "fi-FI",
    "DK" => "da-DK",
    "CZ" => "cs-CZ",
    "HU" => "hu-HU",
    "RO" => "ro-RO",
    "BG" => "bg-BG",
    "HR" => "hr-HR",
    "UA" => "uk-UA",
    "PH" => "fil-PH",
    "ID" => "id-ID",
    "MY" => "ms-MY",
    "ZA" => "af-ZA",
    "ET" => "am-ET",
    "IR" => "fa-IR",
    "PK" => "ur-PK",
    "BD" => "bn-BD",
    "NP" => "ne-NP",
    "LK" => "si-LK",
    "KH" => "km-KH",
    "MM" => "my-MM",
    "MN" => "mn-MN",
    "KZ" => "kk-KZ",
    "UZ" => "uz-UZ",
    "AZ" => "az-AZ",
    "GE" => "ka-GE",
    "AM" => "hy-AM",
    "AL" => "sq-AL",
    "LV" => "lv-LV",
    "LT" => "lt-LT",
    "EE" => "et-EE",
    "IS" => "is-IS",
    "IE" => "ga-IE",
    "MT" => "mt-MT",
    "LU" => "lb-LU",
    "SK" => "sk-SK",
    "SI" => "sl-SI",
};

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

/// Resolve a 2-letter country code to a speech locale tag.
///
/// Total over all inputs: codes are matched case-insensitively, and anything
/// not in the table resolves to [`FALLBACK_TAG`] (`"en-US"`).
///
/// ```rust
/// use phrase_atlas::locale::resolve;
///
/// assert_eq!(resolve("FR"), "fr-FR");
/// assert_eq!(resolve("fr"), "fr-FR");
/// assert_eq!(resolve("ZZ"), "en-US");
/// ```
pub fn resolve(country_code: &str) -> &'static str {
    let normalized = country_code.trim().to_ascii_uppercase();
    LOCALE_TAGS.get(normalized.as_str()).copied().unwrap_or(FALLBACK_TAG)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::sync::OnceLock;

use lingua::{Language, LanguageDetectorBuilder};

/// Guesses the language of a text sample.
///
/// Returns an ISO 639-1 tag, or `None` when the sample is empty or too
/// ambiguous to call.
pub trait LanguageDetector {
    fn detect(&self, sample: &str) -> Option<String>;
}

/// Detector backed by `lingua`, limited to the languages the keyboard has
/// layouts for.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinguaDetector;

impl LanguageDetector for LinguaDetector {
    fn detect(&self, sample: &str) -> Option<String> {
        if sample.trim().is_empty() {
            return None;
        }
        let language = language_detector().detect_language_of(sample)?;
        Some(language.iso_code_639_1().to_string())
    }
}

fn language_detector() -> &'static lingua::LanguageDetector {
    static DETECTOR: OnceLock<lingua::LanguageDetector> = OnceLock::new();
    DETECTOR.get_or_init(|| {
        LanguageDetectorBuilder::from_languages(&[
            Language::English,
            Language::Hebrew,
            Language::German,
        ])
        .with_minimum_relative_distance(0.20)
        .build()
    })
}

/// Lowercases a language tag and drops region or script subtags
/// (`de-AT` and `de_DE` both become `de`).
pub fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

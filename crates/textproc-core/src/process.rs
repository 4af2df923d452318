//! The text processing performed behind `POST /api/process`.

use crate::locale::Locale;

/// Upper-cases `input` and prefixes it with the locale's `processed` label.
///
/// Upper-casing is Unicode-aware, so the output may be longer than the
/// input (`ß` becomes `SS`).
pub fn process_data(input: &str, locale: Locale) -> String {
    format!("{} {}", locale.labels().processed, input.to_uppercase())
}

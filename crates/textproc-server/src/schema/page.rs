//! Placeholder substitution for the embedded home page template.

use textproc_core::Locale;

const TEMPLATE: &str = include_str!("../../static/index.html");

/// Renders the home page for `locale`.
///
/// The result and error labels are injected as data attributes on the
/// output element, where `script.js` reads them.
pub fn render_index(locale: Locale) -> String {
    let labels = locale.labels();
    TEMPLATE
        .replace("__LANG__", locale.tag())
        .replace("__RESULT_LABEL__", labels.result)
        .replace("__ERROR_LABEL__", labels.error)
}

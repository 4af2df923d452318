//! Locales and the label sets they select.
//!
//! Labels are shared by the server (the `processed` prefix and the labels
//! injected into the home page) and by the submit handler when it renders
//! into the output element.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Supported UI locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// The fixed labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Prefix for a successful submission, e.g. `Result:`.
    pub result: &'static str,
    /// Prefix for a failed submission, e.g. `Error:`.
    pub error: &'static str,
    /// Prefix the server puts in front of processed text.
    pub processed: &'static str,
}

const EN: Labels = Labels {
    result: "Result:",
    error: "Error:",
    processed: "Processed:",
};

const RU: Labels = Labels {
    result: "Результат:",
    error: "Ошибка:",
    processed: "Обработано:",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    /// BCP 47 tag, used for the page's `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(CoreError::UnknownLocale { tag: s.to_string() }),
        }
    }
}

//! Core error types for textproc-core.

use thiserror::Error;

/// Errors produced by the textproc-core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A locale tag that has no label set.
    #[error("unknown locale: '{tag}' (expected 'en' or 'ru')")]
    UnknownLocale { tag: String },
}

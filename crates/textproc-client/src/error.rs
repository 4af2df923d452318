//! Failures of a single submission.
//!
//! Every variant ends up in the same place: its `Display` string is
//! rendered into the output element behind the error label.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body is JSON `null`, which has no `result` to read.
    #[error("cannot read properties of null (reading 'result')")]
    NullBody,
}

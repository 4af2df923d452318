//! Request/response bodies for the process endpoint.

use serde::{Deserialize, Serialize};

/// Path of the process endpoint, relative to the server root.
pub const PROCESS_PATH: &str = "/api/process";

/// Body of `POST /api/process`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Raw text from the input control. Absent means empty.
    #[serde(default)]
    pub input: String,
}

/// Successful response of `POST /api/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub result: String,
}

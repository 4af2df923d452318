//! Rendering of submission outcomes into the output element.
//!
//! The output element receives inner markup with a bold label, e.g.
//! `<strong>Result:</strong> 42`. The text is not escaped: the page assigns
//! it as markup, the same way the browser script does.

use std::fmt;

use serde_json::{Number, Value};

use crate::locale::Labels;

/// Which branch of a submission produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Result,
    Error,
}

/// A label plus the text shown after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub kind: OutputKind,
    pub label: &'static str,
    pub text: String,
}

impl RenderedOutput {
    pub fn result(labels: &Labels, text: impl Into<String>) -> Self {
        RenderedOutput {
            kind: OutputKind::Result,
            label: labels.result,
            text: text.into(),
        }
    }

    pub fn error(labels: &Labels, text: impl Into<String>) -> Self {
        RenderedOutput {
            kind: OutputKind::Error,
            label: labels.error,
            text: text.into(),
        }
    }

    /// Renders the `result` field of a response body.
    pub fn from_response_body(labels: &Labels, body: &Value) -> Self {
        Self::result(labels, display_field(body.get("result")))
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }

    /// Inner markup for the output element.
    pub fn to_markup(&self) -> String {
        format!("<strong>{}</strong> {}", self.label, self.text)
    }
}

impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.text)
    }
}

/// Formats a possibly missing JSON field the way a script template literal
/// would interpolate it.
pub fn display_field(field: Option<&Value>) -> String {
    match field {
        None => "undefined".to_string(),
        Some(value) => display_value(value),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        // Nested null/undefined become empty strings inside Array.join.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Largest integer a double holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Integral doubles print without a fractional part (`1.0` shows as `1`).
fn display_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

//! The submit handler: one POST per invocation, rendered into the page.

use serde_json::Value;
use textproc_core::{Locale, ProcessRequest, RenderedOutput, PROCESS_PATH};

use crate::error::SubmitError;
use crate::page::{Page, INPUT_ELEMENT_ID, OUTPUT_ELEMENT_ID};

/// Posts the page's input to a process endpoint and renders the reply.
///
/// Invocations are independent: there is no retry, timeout, or
/// cancellation, and overlapping submissions each overwrite the output
/// element when they complete.
#[derive(Debug, Clone)]
pub struct SubmitHandler {
    client: reqwest::Client,
    endpoint: String,
    locale: Locale,
}

impl SubmitHandler {
    /// Creates a handler posting to `{base_url}/api/process`.
    pub fn new(base_url: &str, locale: Locale) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, locale)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, locale: Locale) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), PROCESS_PATH);
        SubmitHandler {
            client,
            endpoint,
            locale,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one submission against `page`.
    ///
    /// Reads `inputData`, posts it, and overwrites `result` with either the
    /// response's `result` field or the error. Never fails: errors are
    /// rendered, and the rendered output is also returned.
    pub async fn submit(&self, page: &Page) -> RenderedOutput {
        let input = page.value(INPUT_ELEMENT_ID);
        let labels = self.locale.labels();

        let output = match self.request(&input).await {
            Ok(body) => RenderedOutput::from_response_body(labels, &body),
            Err(err) => {
                tracing::debug!(error = %err, "submission failed");
                RenderedOutput::error(labels, err.to_string())
            }
        };

        page.set_inner_html(OUTPUT_ELEMENT_ID, output.to_markup());
        output
    }

    /// Sends `{"input": input}` and parses the reply body as JSON.
    ///
    /// The status code is not inspected; any body that parses is returned,
    /// except `null`, from which no field can be read.
    pub async fn request(&self, input: &str) -> Result<Value, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, input_len = input.len(), "submitting input");

        let body = ProcessRequest {
            input: input.to_string(),
        };
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(%status, body_len = bytes.len(), "received response");

        let value: Value = serde_json::from_slice(&bytes)?;
        if value.is_null() {
            return Err(SubmitError::NullBody);
        }
        Ok(value)
    }
}

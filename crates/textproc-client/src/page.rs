//! In-memory model of the host page's elements.
//!
//! A [`Page`] is a cloneable handle; clones share the same elements, so
//! several in-flight submissions can write to one output element.

use std::sync::Arc;

use dashmap::DashMap;

/// Identifier of the text input the handler reads.
pub const INPUT_ELEMENT_ID: &str = "inputData";

/// Identifier of the element the handler writes into.
pub const OUTPUT_ELEMENT_ID: &str = "result";

#[derive(Debug, Clone, Default)]
struct Element {
    value: String,
    inner_html: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Arc<DashMap<String, Element>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current value of an input control, creating it if needed.
    pub fn set_value(&self, id: &str, value: impl Into<String>) {
        self.elements.entry(id.to_string()).or_default().value = value.into();
    }

    /// Current value of an input control; empty if there is no such element.
    pub fn value(&self, id: &str) -> String {
        self.elements
            .get(id)
            .map(|el| el.value.clone())
            .unwrap_or_default()
    }

    /// Replaces the inner markup of an element, creating it if needed.
    pub fn set_inner_html(&self, id: &str, markup: impl Into<String>) {
        self.elements.entry(id.to_string()).or_default().inner_html = Some(markup.into());
    }

    /// Inner markup of an element, or `None` if it was never written.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.elements.get(id).and_then(|el| el.inner_html.clone())
    }
}

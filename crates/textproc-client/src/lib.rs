//! Submit handler for the textproc process endpoint.
//!
//! [`SubmitHandler`] reads the text of the `inputData` element from a
//! [`Page`], posts it to `/api/process`, and overwrites the `result`
//! element with the rendered result or error.

pub mod error;
pub mod handler;
pub mod page;

pub use error::SubmitError;
pub use handler::SubmitHandler;
pub use page::{Page, INPUT_ELEMENT_ID, OUTPUT_ELEMENT_ID};

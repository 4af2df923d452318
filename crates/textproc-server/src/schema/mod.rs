//! API schema types for request/response definitions.
//!
//! The process endpoint's bodies live in `textproc_core::wire` since the
//! client shares them; this module holds the server-only ones.

pub mod health;
pub mod page;

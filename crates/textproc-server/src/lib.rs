//! HTTP server for the textproc page and its process endpoint.
//!
//! Serves the home page with the submit script, and answers
//! `POST /api/process` with the processed text. This crate contains the
//! router, handlers, configuration, and error mapping.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;

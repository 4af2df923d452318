//! HTTP handler modules for the textproc server.
//!
//! Handlers are thin: they decode the request, call into `textproc_core`,
//! and return JSON or embedded assets.

pub mod assets;
pub mod health;
pub mod process;

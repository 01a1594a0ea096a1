//! Output generation for mapped patient documents.
//!
//! The document is rendered once as pretty JSON (2-space indent), printed to
//! the console and then persisted. A persistence failure therefore happens
//! after the console output has already been produced.

#![deny(unsafe_code)]

pub mod error;
pub mod json;

pub use error::{OutputError, Result};
pub use json::{emit_document, render_document, write_document};

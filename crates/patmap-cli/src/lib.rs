//! CLI library components for the patient record mapper.

pub mod logging;
pub mod pipeline;

//! CLI command implementations

pub mod analyze;
pub mod combinations;
pub mod interactive;
pub mod json_output;

mod reporting;

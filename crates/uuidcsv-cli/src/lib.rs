//! CLI library components for the UUID CSV validator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;

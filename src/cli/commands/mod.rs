//! CLI command implementations.

pub mod about;
pub mod analyze;
pub mod config;
pub mod modules;

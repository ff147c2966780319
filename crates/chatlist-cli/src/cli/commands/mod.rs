//! CLI command handlers.

pub mod browse;
pub mod config;
pub mod threads;

//! Configuration management for the PlexTrac CLI.
//!
//! This crate provides types and a loader for assembling PlexTrac connection
//! configuration from `.env` files, environment variables, and CLI overrides.

pub mod constants;
mod loader;
mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{AuthConfig, Config, ConnectionConfig, WorkflowConfig};

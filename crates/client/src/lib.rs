//! PlexTrac REST API client.
//!
//! This crate implements the three layers the CLI is built on:
//!
//! - [`transport`]: verb-specific HTTP operations that classify every
//!   outcome — parsed JSON, raw non-JSON body, or a typed network error.
//! - [`endpoints`]: a declarative catalog binding logical operation names to
//!   verb and path, delegating to the transport.
//! - [`auth::SessionManager`] and [`PlextracClient`]: session state and the
//!   interactive validation/authentication flows that keep a short-lived
//!   bearer credential current for all downstream callers.
//!
//! Interactive steps go through the [`Prompt`] trait so the flows can be
//! driven by a scripted implementation in tests.

pub mod auth;
mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod prompt;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::SessionManager;
pub use client::{PlextracClient, PlextracClientBuilder};
pub use error::{ClientError, Result};
pub use prompt::Prompt;
pub use transport::ApiResponse;

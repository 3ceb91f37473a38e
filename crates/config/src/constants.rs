//! Centralized constants for the PlexTrac CLI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Authentication Window
// =============================================================================

/// How long a bearer credential issued by the authenticate endpoint is valid.
pub const AUTH_WINDOW_SECS: u64 = 900;

/// Buffer before the window closes in which the credential is treated as
/// stale. A token expiring mid-flight between the validity check and the
/// actual API call would fail that call, so renewal happens early.
pub const EXPIRY_BUFFER_SECS: u64 = 60;

/// Elapsed seconds after which `auth_headers()` re-authenticates.
pub const REAUTH_AFTER_SECS: u64 = AUTH_WINDOW_SECS - EXPIRY_BUFFER_SECS;

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Header carrying the edge-access token on instances deployed behind an
/// additional network security layer.
pub const EDGE_ACCESS_HEADER: &str = "cf-access-token";

//! Typed models for API request and response bodies.

mod auth;
mod findings;
mod records;

pub use auth::AuthenticateResponse;
pub use findings::{BulkFindingsStatusUpdate, FindingStatus, StatusData};
pub use records::{Record, records_from};

//! List-entry records returned by the client, report, and finding endpoints.
//!
//! The list endpoints all return arrays of the same loose shape:
//!
//! ```json
//! {
//!   "id": "client_1912",
//!   "doc_id": [1912],
//!   "data": [1912, "test client", ...]
//! }
//! ```
//!
//! `data` is a heterogeneous array whose first element is the numeric id and
//! whose second is the display name. Accessors extract those positions
//! instead of modeling the whole tail.

use serde_json::Value;
use serde::Deserialize;

use crate::transport::ApiResponse;

/// One entry from a list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub doc_id: Vec<Value>,
    #[serde(default)]
    pub data: Vec<Value>,
}

impl Record {
    /// Numeric identifier, `data[0]`.
    pub fn numeric_id(&self) -> Option<u64> {
        self.data.first().and_then(Value::as_u64)
    }

    /// Display name, `data[1]`.
    pub fn name(&self) -> Option<&str> {
        self.data.get(1).and_then(Value::as_str)
    }

    /// Whether any element of `data` equals `needle` exactly. This is how a
    /// configured client name is matched against the list response.
    pub fn matches_name(&self, needle: &str) -> bool {
        self.data.iter().any(|v| v.as_str() == Some(needle))
    }
}

/// Interpret a response as a list of records.
///
/// Returns `None` when the response is not a JSON array — the signal the
/// workflow uses to treat an operation as failed and skip or stop.
pub fn records_from(response: &ApiResponse) -> Option<Vec<Record>> {
    let value = response.json()?;
    if !value.is_array() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

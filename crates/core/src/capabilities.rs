//! Wire-format capability shapes shared across the workspace.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A capability mapping: string keys to arbitrary JSON values.
///
/// Backed by an insertion-ordered map (`serde_json` with `preserve_order`)
/// so that the order the merge algorithm inserts keys is the order they
/// serialize in. Payload snapshots stay reproducible across runs.
pub type CapabilityMap = serde_json::Map<String, Value>;

/// The capabilities object of a W3C new-session request.
///
/// `alwaysMatch` holds the fields every acceptable session configuration
/// must satisfy; `firstMatch` lists per-browser remainders in preference
/// order, and the remote end picks the first entry it can honor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesPayload {
    #[serde(default)]
    pub always_match: CapabilityMap,
    #[serde(default)]
    pub first_match: Vec<CapabilityMap>,
}

impl CapabilitiesPayload {
    /// Degenerate payload for a session request with no option records:
    /// nothing always matches and the single first-match clause is empty.
    pub fn empty() -> Self {
        Self {
            always_match: CapabilityMap::new(),
            first_match: vec![CapabilityMap::new()],
        }
    }

    /// Wrap the payload as the body of a new-session command:
    /// `{"capabilities": {"alwaysMatch": ..., "firstMatch": [...]}}`.
    /// Remote ends parse this exact shape, so it never varies.
    pub fn into_request_body(self) -> Value {
        json!({ "capabilities": self })
    }
}

impl Default for CapabilitiesPayload {
    fn default() -> Self {
        Self::empty()
    }
}

//! The seam between capability negotiation and the wire.

use async_trait::async_trait;
use capmatch_core::Result;
use serde_json::Value;

/// Dispatches a new-session command to a remote automation end.
///
/// Implementations own connection details, retries, and response
/// parsing; this workspace only assembles the request body. Failures
/// surface as `Error::Transport`.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Send a new-session request body and return the raw response.
    async fn new_session(&self, body: Value) -> Result<Value>;
}

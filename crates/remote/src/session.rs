//! Session-creation orchestration.
//!
//! A [`SessionBuilder`] collects browser option sets and at most one
//! legacy capability map, upgrades the legacy map to W3C form, merges
//! everything into the new-session payload, and hands the body to the
//! transport. Deprecation notices from the upgrade are delivered
//! according to the configured [`DeprecationMode`].

use capmatch_core::{
    merge, normalize, CapabilitiesPayload, CapabilityMap, DeprecationMode, DeprecationNotice,
    Error, OptionRecord, Result,
};
use capmatch_options::BrowserOptions;
use serde_json::Value;
use tracing::{debug, warn};

use crate::transport::SessionTransport;

/// A built new-session request: the capabilities payload plus the
/// deprecation notices produced while building it.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub payload: CapabilitiesPayload,
    pub notices: Vec<DeprecationNotice>,
}

impl SessionRequest {
    /// The command body handed to the transport.
    pub fn into_body(self) -> Value {
        self.payload.into_request_body()
    }
}

/// Accumulates the inputs of one new-session request.
pub struct SessionBuilder {
    records: Vec<OptionRecord>,
    legacy: Option<CapabilityMap>,
    mode: DeprecationMode,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            legacy: None,
            mode: DeprecationMode::default(),
        }
    }

    pub fn with_deprecation_mode(mut self, mode: DeprecationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Append a browser option set. Order matters: the remote end picks
    /// the first entry it can satisfy.
    pub fn with_options(mut self, options: &dyn BrowserOptions) -> Self {
        debug!(
            "Adding {} option set (vendor key: {})",
            options.browser_name().unwrap_or("generic"),
            options.vendor_key().unwrap_or("none"),
        );
        self.records.push(options.to_record());
        self
    }

    /// Append an already-built option record.
    pub fn with_record(mut self, record: OptionRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Supply a flat legacy capability map, upgraded to W3C form during
    /// `build`. Replaces any previously supplied map.
    pub fn with_legacy(mut self, caps: CapabilityMap) -> Self {
        self.legacy = Some(caps);
        self
    }

    /// Normalize, merge, and assemble the request. Under
    /// `DeprecationMode::Strict` a legacy key aborts the build.
    pub fn build(&self) -> Result<SessionRequest> {
        let mut records = self.records.clone();
        let mut notices = Vec::new();

        if let Some(legacy) = &self.legacy {
            let (w3c, legacy_notices) = normalize(legacy.clone());
            notices = legacy_notices;
            self.deliver(&notices)?;
            // The legacy map ranks after the caller's explicit option
            // sets: it is the compatibility fallback, not a preference.
            records.push(OptionRecord::from_flat(w3c));
        }

        Ok(SessionRequest {
            payload: merge(&records),
            notices,
        })
    }

    /// Build the request and dispatch it through the transport.
    pub async fn start(&self, transport: &dyn SessionTransport) -> Result<Value> {
        let request = self.build()?;
        debug!(
            "Starting session: {} firstMatch entries, {} deprecation notice(s)",
            request.payload.first_match.len(),
            request.notices.len(),
        );
        transport.new_session(request.into_body()).await
    }

    fn deliver(&self, notices: &[DeprecationNotice]) -> Result<()> {
        match self.mode {
            DeprecationMode::Warn => {
                for notice in notices {
                    warn!("{}", notice);
                }
                Ok(())
            }
            DeprecationMode::Silent => Ok(()),
            DeprecationMode::Strict => match notices.first() {
                Some(notice) => Err(Error::Deprecated(notice.to_string())),
                None => Ok(()),
            },
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

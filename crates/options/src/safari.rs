//! Safari option set.

use capmatch_core::{CapabilityMap, OptionRecord};
use serde_json::Value;

use crate::common::CommonOptions;
use crate::BrowserOptions;

/// Options for a Safari session.
///
/// Safari has no vendor block: its two driver switches travel as flat
/// `safari:`-prefixed capabilities, and the platform is always macOS.
#[derive(Debug, Clone, Default)]
pub struct SafariOptions {
    pub common: CommonOptions,
    /// Pre-attach the Web Inspector to the session.
    pub automatic_inspection: bool,
    /// Capture a timeline profile for the session.
    pub automatic_profiling: bool,
}

impl SafariOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BrowserOptions for SafariOptions {
    fn browser_name(&self) -> Option<&str> {
        Some("safari")
    }

    fn vendor_key(&self) -> Option<&'static str> {
        None
    }

    fn to_record(&self) -> OptionRecord {
        let mut caps = CapabilityMap::new();
        self.common.apply(&mut caps);
        caps.insert("platformName".to_string(), Value::String("mac".to_string()));
        if self.automatic_inspection {
            caps.insert("safari:automaticInspection".to_string(), Value::Bool(true));
        }
        if self.automatic_profiling {
            caps.insert("safari:automaticProfiling".to_string(), Value::Bool(true));
        }

        OptionRecord {
            browser_name: Some("safari".to_string()),
            caps,
            vendor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_record_shape() {
        let record = SafariOptions::new().to_record();
        assert_eq!(record.browser_name.as_deref(), Some("safari"));
        assert!(record.vendor.is_none());
        assert_eq!(
            serde_json::to_value(&record.caps).unwrap(),
            json!({ "pageLoadStrategy": "normal", "platformName": "mac" })
        );
    }

    #[test]
    fn test_driver_switches_are_flat_vendor_capabilities() {
        let mut options = SafariOptions::new();
        options.automatic_inspection = true;
        options.automatic_profiling = true;
        let record = options.to_record();
        assert_eq!(
            record.caps.get("safari:automaticInspection"),
            Some(&json!(true))
        );
        assert_eq!(
            record.caps.get("safari:automaticProfiling"),
            Some(&json!(true))
        );
    }
}

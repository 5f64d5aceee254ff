//! Microsoft Edge option set.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use capmatch_core::{CapabilityMap, OptionRecord, VendorBlock};
use serde_json::Value;

use crate::common::CommonOptions;
use crate::BrowserOptions;

/// Options for an Edge session. Chromium-shaped block under
/// `ms:edgeOptions`; sessions can also target a WebView2 app instead of
/// the browser proper.
#[derive(Debug, Clone, Default)]
pub struct EdgeOptions {
    pub common: CommonOptions,
    /// Attach to a WebView2 application rather than Edge itself.
    pub use_webview: bool,
    args: Vec<String>,
    extensions: Vec<String>,
    binary: Option<String>,
}

impl EdgeOptions {
    /// Vendor-extension key for Edge's option block.
    pub const KEY: &'static str = "ms:edgeOptions";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command-line argument passed to the browser process.
    pub fn add_argument(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Add a packed extension (CRX bytes); encoded to base64 for the wire.
    pub fn add_extension(&mut self, crx: &[u8]) {
        self.extensions.push(B64.encode(crx));
    }

    /// Path to the browser binary, when not the installed default.
    pub fn set_binary(&mut self, path: impl Into<String>) {
        self.binary = Some(path.into());
    }
}

impl BrowserOptions for EdgeOptions {
    fn browser_name(&self) -> Option<&str> {
        if self.use_webview {
            Some("webview2")
        } else {
            Some("MicrosoftEdge")
        }
    }

    fn vendor_key(&self) -> Option<&'static str> {
        Some(Self::KEY)
    }

    fn to_record(&self) -> OptionRecord {
        let mut caps = CapabilityMap::new();
        self.common.apply(&mut caps);

        let mut block = CapabilityMap::new();
        block.insert(
            "args".to_string(),
            Value::Array(self.args.iter().map(|a| Value::String(a.clone())).collect()),
        );
        block.insert(
            "extensions".to_string(),
            Value::Array(
                self.extensions
                    .iter()
                    .map(|e| Value::String(e.clone()))
                    .collect(),
            ),
        );
        if let Some(binary) = &self.binary {
            block.insert("binary".to_string(), Value::String(binary.clone()));
        }

        OptionRecord {
            browser_name: self.browser_name().map(|name| name.to_string()),
            caps,
            vendor: Some(VendorBlock::new(Self::KEY, block)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_record_shape() {
        let record = EdgeOptions::new().to_record();
        assert_eq!(record.browser_name.as_deref(), Some("MicrosoftEdge"));
        let vendor = record.vendor.unwrap();
        assert_eq!(vendor.key, EdgeOptions::KEY);
        assert_eq!(
            serde_json::to_value(&vendor.caps).unwrap(),
            json!({ "args": [], "extensions": [] })
        );
    }

    #[test]
    fn test_webview_changes_browser_name() {
        let mut options = EdgeOptions::new();
        options.use_webview = true;
        let record = options.to_record();
        assert_eq!(record.browser_name.as_deref(), Some("webview2"));
    }

    #[test]
    fn test_arguments_and_binary() {
        let mut options = EdgeOptions::new();
        options.add_argument("--inprivate");
        options.set_binary("/opt/msedge/msedge");
        let vendor = options.to_record().vendor.unwrap();
        assert_eq!(vendor.caps.get("args"), Some(&json!(["--inprivate"])));
        assert_eq!(vendor.caps.get("binary"), Some(&json!("/opt/msedge/msedge")));
    }
}

//! Chrome option set.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use capmatch_core::{CapabilityMap, OptionRecord, VendorBlock};
use serde_json::Value;

use crate::common::CommonOptions;
use crate::BrowserOptions;

/// Options for a Chrome session.
///
/// The vendor block always carries `args` and `extensions`, even when
/// empty; chromedriver expects both fields to exist.
#[derive(Debug, Clone, Default)]
pub struct ChromeOptions {
    pub common: CommonOptions,
    args: Vec<String>,
    extensions: Vec<String>,
    binary: Option<String>,
    prefs: CapabilityMap,
    experimental: CapabilityMap,
}

impl ChromeOptions {
    /// Vendor-extension key for Chrome's option block.
    pub const KEY: &'static str = "goog:chromeOptions";

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

    /// Add a packed extension that is already base64-encoded.
    pub fn add_encoded_extension(&mut self, encoded: impl Into<String>) {
        self.extensions.push(encoded.into());
    }

    /// Path to the browser binary, when not the installed default.
    pub fn set_binary(&mut self, path: impl Into<String>) {
        self.binary = Some(path.into());
    }

    /// Set a profile preference, written under `prefs` in the block.
    pub fn set_pref(&mut self, name: impl Into<String>, value: Value) {
        self.prefs.insert(name.into(), value);
    }

    /// Set a chromedriver experimental option, merged into the block
    /// top-level. Overrides the dedicated fields on key collision.
    pub fn set_experimental_option(&mut self, name: impl Into<String>, value: Value) {
        self.experimental.insert(name.into(), value);
    }
}

impl BrowserOptions for ChromeOptions {
    fn browser_name(&self) -> Option<&str> {
        Some("chrome")
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
        if !self.prefs.is_empty() {
            block.insert("prefs".to_string(), Value::Object(self.prefs.clone()));
        }
        for (key, value) in &self.experimental {
            block.insert(key.clone(), value.clone());
        }

        OptionRecord {
            browser_name: Some("chrome".to_string()),
            caps,
            vendor: Some(VendorBlock::new(Self::KEY, block)),
        }
    }
}

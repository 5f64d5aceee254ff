//! Firefox option set.

use capmatch_core::{CapabilityMap, OptionRecord, VendorBlock};
use serde_json::Value;

use crate::common::CommonOptions;
use crate::BrowserOptions;

/// Options for a Firefox session.
///
/// Defaults mirror geckodriver expectations: insecure certificates are
/// accepted and the remote debugging address is requested, both as flat
/// fields. The `moz:firefoxOptions` block is always present; `args`,
/// `prefs`, `binary`, and `log` appear only when set.
#[derive(Debug, Clone)]
pub struct FirefoxOptions {
    pub common: CommonOptions,
    /// Ask geckodriver to report the remote debugging address.
    pub debugger_address: bool,
    args: Vec<String>,
    prefs: CapabilityMap,
    binary: Option<String>,
    log_level: Option<String>,
}

impl Default for FirefoxOptions {
    fn default() -> Self {
        let mut common = CommonOptions::new();
        common.accept_insecure_certs = Some(true);
        Self {
            common,
            debugger_address: true,
            args: Vec::new(),
            prefs: CapabilityMap::new(),
            binary: None,
            log_level: None,
        }
    }
}

impl FirefoxOptions {
    /// Vendor-extension key for Firefox's option block.
    pub const KEY: &'static str = "moz:firefoxOptions";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command-line argument passed to the browser process.
    pub fn add_argument(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Set an `about:config` preference for the session profile.
    pub fn set_pref(&mut self, name: impl Into<String>, value: Value) {
        self.prefs.insert(name.into(), value);
    }

    /// Path to the browser binary, when not the installed default.
    pub fn set_binary(&mut self, path: impl Into<String>) {
        self.binary = Some(path.into());
    }

    /// Gecko log verbosity (`trace`, `debug`, `info`, ...).
    pub fn set_log_level(&mut self, level: impl Into<String>) {
        self.log_level = Some(level.into());
    }
}

impl BrowserOptions for FirefoxOptions {
    fn browser_name(&self) -> Option<&str> {
        Some("firefox")
    }

    fn vendor_key(&self) -> Option<&'static str> {
        Some(Self::KEY)
    }

    fn to_record(&self) -> OptionRecord {
        let mut caps = CapabilityMap::new();
        self.common.apply(&mut caps);
        if self.debugger_address {
            caps.insert("moz:debuggerAddress".to_string(), Value::Bool(true));
        }

        let mut block = CapabilityMap::new();
        if !self.args.is_empty() {
            block.insert(
                "args".to_string(),
                Value::Array(self.args.iter().map(|a| Value::String(a.clone())).collect()),
            );
        }
        if !self.prefs.is_empty() {
            block.insert("prefs".to_string(), Value::Object(self.prefs.clone()));
        }
        if let Some(binary) = &self.binary {
            block.insert("binary".to_string(), Value::String(binary.clone()));
        }
        if let Some(level) = &self.log_level {
            let mut log = CapabilityMap::new();
            log.insert("level".to_string(), Value::String(level.clone()));
            block.insert("log".to_string(), Value::Object(log));
        }

        OptionRecord {
            browser_name: Some("firefox".to_string()),
            caps,
            vendor: Some(VendorBlock::new(Self::KEY, block)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capmatch_core::merge;
    use crate::chrome::ChromeOptions;
    use serde_json::json;

    #[test]
    fn test_default_record_shape() {
        let record = FirefoxOptions::new().to_record();
        assert_eq!(record.browser_name.as_deref(), Some("firefox"));
        assert_eq!(
            serde_json::to_value(&record.caps).unwrap(),
            json!({
                "pageLoadStrategy": "normal",
                "acceptInsecureCerts": true,
                "moz:debuggerAddress": true,
            })
        );
        let vendor = record.vendor.unwrap();
        assert_eq!(vendor.key, FirefoxOptions::KEY);
        assert!(vendor.caps.is_empty());
    }

    #[test]
    fn test_block_fields_appear_only_when_set() {
        let mut options = FirefoxOptions::new();
        options.add_argument("-headless");
        options.set_pref("dom.webnotifications.enabled", json!(false));
        options.set_binary("/usr/bin/firefox-esr");
        options.set_log_level("trace");
        let vendor = options.to_record().vendor.unwrap();
        assert_eq!(
            serde_json::to_value(&vendor.caps).unwrap(),
            json!({
                "args": ["-headless"],
                "prefs": { "dom.webnotifications.enabled": false },
                "binary": "/usr/bin/firefox-esr",
                "log": { "level": "trace" },
            })
        );
    }

    #[test]
    fn test_debugger_address_can_be_disabled() {
        let mut options = FirefoxOptions::new();
        options.debugger_address = false;
        let record = options.to_record();
        assert!(!record.caps.contains_key("moz:debuggerAddress"));
    }

    #[test]
    fn test_chrome_and_firefox_merge_like_the_wire_fixture() {
        let chrome = ChromeOptions::new();
        let mut firefox = FirefoxOptions::new();
        firefox.add_argument("foo");

        let payload = merge(&[chrome.to_record(), firefox.to_record()]);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "alwaysMatch": { "pageLoadStrategy": "normal" },
                "firstMatch": [
                    {
                        "browserName": "chrome",
                        "goog:chromeOptions": { "args": [], "extensions": [] },
                    },
                    {
                        "browserName": "firefox",
                        "acceptInsecureCerts": true,
                        "moz:debuggerAddress": true,
                        "moz:firefoxOptions": { "args": ["foo"] },
                    },
                ],
            })
        );
    }
}

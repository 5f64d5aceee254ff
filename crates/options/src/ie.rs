//! Internet Explorer option set.

use capmatch_core::{CapabilityMap, OptionRecord, VendorBlock};
use serde_json::Value;

use crate::common::CommonOptions;
use crate::BrowserOptions;

/// Options for an Internet Explorer session.
///
/// The `se:ieOptions` block is emitted only when at least one IE switch
/// is set; a default instance sends flat capabilities alone.
#[derive(Debug, Clone, Default)]
pub struct IeOptions {
    pub common: CommonOptions,
    ignore_zoom_level: Option<bool>,
    native_events: Option<bool>,
    require_window_focus: Option<bool>,
    ensure_clean_session: Option<bool>,
    initial_browser_url: Option<String>,
}

impl IeOptions {
    /// Vendor-extension key for IE's option block.
    pub const KEY: &'static str = "se:ieOptions";

    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the browser zoom-level check on session start.
    pub fn set_ignore_zoom_level(&mut self, ignore: bool) {
        self.ignore_zoom_level = Some(ignore);
    }

    /// Use native OS events for mouse and keyboard interaction.
    pub fn set_native_events(&mut self, native: bool) {
        self.native_events = Some(native);
    }

    /// Require window focus before native interactions.
    pub fn set_require_window_focus(&mut self, require: bool) {
        self.require_window_focus = Some(require);
    }

    /// Clear cache, cookies, and history before the session starts.
    pub fn set_ensure_clean_session(&mut self, clean: bool) {
        self.ensure_clean_session = Some(clean);
    }

    /// URL the browser opens on session start.
    pub fn set_initial_browser_url(&mut self, url: impl Into<String>) {
        self.initial_browser_url = Some(url.into());
    }
}

impl BrowserOptions for IeOptions {
    fn browser_name(&self) -> Option<&str> {
        Some("internet explorer")
    }

    fn vendor_key(&self) -> Option<&'static str> {
        Some(Self::KEY)
    }

    fn to_record(&self) -> OptionRecord {
        let mut caps = CapabilityMap::new();
        self.common.apply(&mut caps);
        caps.insert(
            "platformName".to_string(),
            Value::String("windows".to_string()),
        );

        let mut block = CapabilityMap::new();
        if let Some(ignore) = self.ignore_zoom_level {
            block.insert("ignoreZoomSetting".to_string(), Value::Bool(ignore));
        }
        if let Some(native) = self.native_events {
            block.insert("nativeEvents".to_string(), Value::Bool(native));
        }
        if let Some(require) = self.require_window_focus {
            block.insert("requireWindowFocus".to_string(), Value::Bool(require));
        }
        if let Some(clean) = self.ensure_clean_session {
            block.insert("ie.ensureCleanSession".to_string(), Value::Bool(clean));
        }
        if let Some(url) = &self.initial_browser_url {
            block.insert("initialBrowserUrl".to_string(), Value::String(url.clone()));
        }

        OptionRecord {
            browser_name: Some("internet explorer".to_string()),
            caps,
            vendor: if block.is_empty() {
                None
            } else {
                Some(VendorBlock::new(Self::KEY, block))
            },
        }
    }
}

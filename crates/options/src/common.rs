//! Capability fields every browser understands.

use capmatch_core::{CapabilityMap, OptionRecord, Proxy};
use serde_json::Value;

use crate::BrowserOptions;

/// Page load strategies defined by the WebDriver spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadStrategy {
    /// Wait for the full document load event (the default).
    Normal,
    /// Return once the DOM is interactive.
    Eager,
    /// Do not wait for any load event.
    None,
}

impl PageLoadStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Eager => "eager",
            Self::None => "none",
        }
    }
}

/// How the browser reacts to an unexpected alert or prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptBehavior {
    Dismiss,
    Accept,
    DismissAndNotify,
    AcceptAndNotify,
    Ignore,
}

impl PromptBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::Accept => "accept",
            Self::DismissAndNotify => "dismiss and notify",
            Self::AcceptAndNotify => "accept and notify",
            Self::Ignore => "ignore",
        }
    }
}

/// The option fields shared by every browser. Each browser-specific
/// option set embeds one of these; on its own it also works as a
/// browser-agnostic option set (no identity, no vendor block).
#[derive(Debug, Clone)]
pub struct CommonOptions {
    pub page_load_strategy: PageLoadStrategy,
    pub accept_insecure_certs: Option<bool>,
    pub proxy: Option<Proxy>,
    pub unhandled_prompt_behavior: Option<PromptBehavior>,
    extra: CapabilityMap,
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            page_load_strategy: PageLoadStrategy::Normal,
            accept_insecure_certs: None,
            proxy: None,
            unhandled_prompt_behavior: None,
            extra: CapabilityMap::new(),
        }
    }
}

impl CommonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary flat capability. The escape hatch for fields
    /// without a dedicated setter; a value set here overrides the
    /// dedicated fields if the keys collide.
    pub fn set_capability(&mut self, key: impl Into<String>, value: Value) {
        self.extra.insert(key.into(), value);
    }

    /// Write the common fields into a record's flat caps, in a fixed
    /// order: `pageLoadStrategy` first, then the optional fields, then
    /// caller extras.
    pub(crate) fn apply(&self, caps: &mut CapabilityMap) {
        caps.insert(
            "pageLoadStrategy".to_string(),
            Value::String(self.page_load_strategy.as_str().to_string()),
        );
        if let Some(accept) = self.accept_insecure_certs {
            caps.insert("acceptInsecureCerts".to_string(), Value::Bool(accept));
        }
        if let Some(proxy) = &self.proxy {
            caps.insert("proxy".to_string(), proxy.to_capability());
        }
        if let Some(behavior) = self.unhandled_prompt_behavior {
            caps.insert(
                "unhandledPromptBehavior".to_string(),
                Value::String(behavior.as_str().to_string()),
            );
        }
        for (key, value) in &self.extra {
            caps.insert(key.clone(), value.clone());
        }
    }
}

impl BrowserOptions for CommonOptions {
    fn browser_name(&self) -> Option<&str> {
        None
    }

    fn vendor_key(&self) -> Option<&'static str> {
        None
    }

    fn to_record(&self) -> OptionRecord {
        let mut caps = CapabilityMap::new();
        self.apply(&mut caps);
        OptionRecord {
            browser_name: None,
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
    fn test_defaults_emit_only_page_load_strategy() {
        let record = CommonOptions::new().to_record();
        assert!(record.browser_name.is_none());
        assert!(record.vendor.is_none());
        assert_eq!(
            serde_json::to_value(&record.caps).unwrap(),
            json!({ "pageLoadStrategy": "normal" })
        );
    }

    #[test]
    fn test_proxy_is_rendered_into_flat_caps() {
        let mut options = CommonOptions::new();
        options.proxy = Some(Proxy::manual().with_http_proxy("foo"));
        let record = options.to_record();
        assert_eq!(
            serde_json::to_value(&record.caps).unwrap(),
            json!({
                "pageLoadStrategy": "normal",
                "proxy": { "proxyType": "manual", "httpProxy": "foo" },
            })
        );
    }

    #[test]
    fn test_prompt_behavior_wire_values() {
        let cases = [
            (PromptBehavior::Dismiss, "dismiss"),
            (PromptBehavior::Accept, "accept"),
            (PromptBehavior::DismissAndNotify, "dismiss and notify"),
            (PromptBehavior::AcceptAndNotify, "accept and notify"),
            (PromptBehavior::Ignore, "ignore"),
        ];
        for (behavior, tag) in cases {
            assert_eq!(behavior.as_str(), tag);
        }
    }

    #[test]
    fn test_set_capability_overrides_dedicated_fields() {
        let mut options = CommonOptions::new();
        options.page_load_strategy = PageLoadStrategy::Eager;
        options.set_capability("pageLoadStrategy", json!("none"));
        let record = options.to_record();
        assert_eq!(record.caps.get("pageLoadStrategy"), Some(&json!("none")));
    }

    #[test]
    fn test_extra_capabilities_follow_dedicated_fields() {
        let mut options = CommonOptions::new();
        options.accept_insecure_certs = Some(false);
        options.set_capability("browserVersion", json!("120"));
        let record = options.to_record();
        let keys: Vec<&str> = record.caps.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["pageLoadStrategy", "acceptInsecureCerts", "browserVersion"]
        );
    }
}

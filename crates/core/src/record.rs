//! Option records: the unit of input to the capability merger.
//!
//! Every browser-specific option set reduces to the same shape before
//! merging: an optional browser identity, a flat map of mergeable fields,
//! and an optional vendor-extension block. The merger depends on nothing
//! else, so new browsers plug in without touching the merge logic.

use serde::Serialize;
use serde_json::Value;

use crate::capabilities::CapabilityMap;
use crate::error::{Error, Result};

/// A vendor-extension block carried by a record, e.g. `goog:chromeOptions`.
///
/// The block is opaque to the merger: it is never inspected structurally
/// and never promoted to `alwaysMatch`, even when identical across records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorBlock {
    /// Namespaced extension key in `prefix:name` form.
    pub key: String,
    /// Extension payload, passed through to the wire unchanged.
    pub caps: CapabilityMap,
}

impl VendorBlock {
    pub fn new(key: impl Into<String>, caps: CapabilityMap) -> Self {
        Self {
            key: key.into(),
            caps,
        }
    }

    /// Build a block from a raw JSON value. Anything but an object is a
    /// malformed record and construction does not proceed.
    pub fn from_value(key: impl Into<String>, value: Value) -> Result<Self> {
        let key = key.into();
        match value {
            Value::Object(caps) => Ok(Self { key, caps }),
            other => Err(Error::MalformedRecord(format!(
                "vendor block `{}` must be a JSON object, got {}",
                key,
                json_type(&other)
            ))),
        }
    }
}

/// One browser's capability request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRecord {
    /// Browser identity, compared across records during merging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_name: Option<String>,
    /// Flat, mergeable capability fields (`pageLoadStrategy`, `proxy`, ...).
    pub caps: CapabilityMap,
    /// Vendor-extension block, always kept record-specific.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<VendorBlock>,
}

impl OptionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a flat capability map, hoisting `browserName`
    /// out of the map into the identity slot. Legacy capability input
    /// arrives this way: one flat map, no vendor block.
    pub fn from_flat(caps: CapabilityMap) -> Self {
        let mut browser_name = None;
        let mut flat = CapabilityMap::new();
        for (key, value) in caps {
            match value {
                Value::String(name) if key == "browserName" => {
                    browser_name = Some(name);
                }
                value => {
                    flat.insert(key, value);
                }
            }
        }
        Self {
            browser_name,
            caps: flat,
            vendor: None,
        }
    }

    /// Parse a record from its JSON object form:
    /// `{"browserName": ..., "caps": {...}, "vendor": {"key": ..., "caps": {...}}}`.
    /// Every field is optional; shape violations surface as
    /// `Error::MalformedRecord`.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut spec = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::MalformedRecord(format!(
                    "record spec must be a JSON object, got {}",
                    json_type(&other)
                )))
            }
        };

        let browser_name = match spec.remove("browserName") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name),
            Some(other) => {
                return Err(Error::MalformedRecord(format!(
                    "browserName must be a string, got {}",
                    json_type(&other)
                )))
            }
        };

        let caps = match spec.remove("caps") {
            None | Some(Value::Null) => CapabilityMap::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(Error::MalformedRecord(format!(
                    "caps must be a JSON object, got {}",
                    json_type(&other)
                )))
            }
        };

        let vendor = match spec.remove("vendor") {
            None | Some(Value::Null) => None,
            Some(Value::Object(mut block)) => {
                let key = match block.remove("key") {
                    Some(Value::String(key)) => key,
                    _ => {
                        return Err(Error::MalformedRecord(
                            "vendor block must carry a string `key`".to_string(),
                        ))
                    }
                };
                let block = match block.remove("caps") {
                    None => VendorBlock::new(key, CapabilityMap::new()),
                    Some(value) => VendorBlock::from_value(key, value)?,
                };
                Some(block)
            }
            Some(other) => {
                return Err(Error::MalformedRecord(format!(
                    "vendor must be a JSON object, got {}",
                    json_type(&other)
                )))
            }
        };

        Ok(Self {
            browser_name,
            caps,
            vendor,
        })
    }

    pub fn with_browser_name(mut self, name: impl Into<String>) -> Self {
        self.browser_name = Some(name.into());
        self
    }

    pub fn with_cap(mut self, key: impl Into<String>, value: Value) -> Self {
        self.caps.insert(key.into(), value);
        self
    }

    pub fn with_vendor(mut self, key: impl Into<String>, caps: CapabilityMap) -> Self {
        self.vendor = Some(VendorBlock::new(key, caps));
        self
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> CapabilityMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_from_flat_hoists_browser_name() {
        let record = OptionRecord::from_flat(as_map(json!({
            "browserName": "chrome",
            "pageLoadStrategy": "normal",
        })));
        assert_eq!(record.browser_name.as_deref(), Some("chrome"));
        assert_eq!(record.caps, as_map(json!({ "pageLoadStrategy": "normal" })));
        assert!(record.vendor.is_none());
    }

    #[test]
    fn test_from_flat_keeps_non_string_browser_name_in_place() {
        let record = OptionRecord::from_flat(as_map(json!({ "browserName": 7 })));
        assert!(record.browser_name.is_none());
        assert_eq!(record.caps, as_map(json!({ "browserName": 7 })));
    }

    #[test]
    fn test_from_value_full_record() {
        let record = OptionRecord::from_value(json!({
            "browserName": "chrome",
            "caps": { "pageLoadStrategy": "eager" },
            "vendor": { "key": "goog:chromeOptions", "caps": { "args": ["foo"] } },
        }))
        .unwrap();
        assert_eq!(record.browser_name.as_deref(), Some("chrome"));
        assert_eq!(record.caps, as_map(json!({ "pageLoadStrategy": "eager" })));
        let vendor = record.vendor.unwrap();
        assert_eq!(vendor.key, "goog:chromeOptions");
        assert_eq!(vendor.caps, as_map(json!({ "args": ["foo"] })));
    }

    #[test]
    fn test_from_value_all_fields_optional() {
        let record = OptionRecord::from_value(json!({})).unwrap();
        assert_eq!(record, OptionRecord::new());
    }

    #[test]
    fn test_from_value_rejects_non_object_vendor_caps() {
        let err = OptionRecord::from_value(json!({
            "vendor": { "key": "goog:chromeOptions", "caps": ["not", "a", "map"] },
        }))
        .unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
        assert!(err.to_string().contains("goog:chromeOptions"));
    }

    #[test]
    fn test_from_value_rejects_vendor_without_key() {
        let err = OptionRecord::from_value(json!({ "vendor": { "caps": {} } })).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
    }

    #[test]
    fn test_from_value_rejects_non_object_spec() {
        let err = OptionRecord::from_value(json!("chrome")).unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_vendor_block_from_value_rejects_scalars() {
        let err = VendorBlock::from_value("moz:firefoxOptions", json!(true)).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
    }

    #[test]
    fn test_serialized_form_parses_back_with_from_value() {
        let record = OptionRecord::new()
            .with_browser_name("chrome")
            .with_cap("pageLoadStrategy", json!("normal"))
            .with_vendor("goog:chromeOptions", as_map(json!({ "args": [] })));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(OptionRecord::from_value(value).unwrap(), record);
    }

    #[test]
    fn test_builder_methods() {
        let record = OptionRecord::new()
            .with_browser_name("firefox")
            .with_cap("acceptInsecureCerts", json!(true))
            .with_vendor("moz:firefoxOptions", as_map(json!({ "args": ["-headless"] })));
        assert_eq!(record.browser_name.as_deref(), Some("firefox"));
        assert_eq!(record.caps.get("acceptInsecureCerts"), Some(&json!(true)));
        assert_eq!(record.vendor.unwrap().key, "moz:firefoxOptions");
    }
}

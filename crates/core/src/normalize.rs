//! Legacy (OSS) capability translation.
//!
//! Upgrades a flat, OSS-era capability map to its W3C equivalent: known
//! deprecated keys are renamed, the proxy-type tag is case-folded to its
//! canonical lowercase wire value, and a notice is recorded for every
//! translated key so the embedding layer can surface deprecation warnings.

use std::fmt;

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::debug;

use crate::capabilities::CapabilityMap;

/// Rewrites a capability value as part of a translation, for legacy keys
/// whose W3C form differs in more than the name.
type ValueTransform = fn(Value) -> Value;

/// One row of the legacy-to-W3C translation table.
struct Translation {
    legacy: &'static str,
    w3c: &'static str,
    transform: Option<ValueTransform>,
}

impl Translation {
    fn apply(&self, value: Value) -> Value {
        match self.transform {
            Some(transform) => transform(value),
            None => value,
        }
    }
}

/// OSS-era capability names and their W3C replacements. Adding a row is
/// the whole cost of supporting another legacy key.
static TRANSLATIONS: Lazy<Vec<Translation>> = Lazy::new(|| {
    vec![
        Translation {
            legacy: "acceptSslCerts",
            w3c: "acceptInsecureCerts",
            transform: None,
        },
        Translation {
            legacy: "version",
            w3c: "browserVersion",
            transform: None,
        },
        Translation {
            legacy: "platform",
            w3c: "platformName",
            transform: None,
        },
    ]
});

fn translation_for(key: &str) -> Option<&'static Translation> {
    TRANSLATIONS.iter().find(|row| row.legacy == key)
}

/// Emitted once per translated legacy key. `Display` renders the stable
/// warning text shown to users; tooling greps for it, so the format
/// names the deprecated key, the replacement, and the removal horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    pub legacy: String,
    pub w3c: String,
}

impl DeprecationNotice {
    pub fn new(legacy: impl Into<String>, w3c: impl Into<String>) -> Self {
        Self {
            legacy: legacy.into(),
            w3c: w3c.into(),
        }
    }
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is not a W3C capability; use `{}` instead. Implicit translation will be removed in 0.2.0",
            self.legacy, self.w3c
        )
    }
}

/// Translate a legacy capability map to W3C form.
///
/// Known deprecated keys are renamed, with values carried over unchanged
/// unless the table registers a transform. Unknown keys pass through
/// verbatim: the W3C capability namespace is open-ended, and rejecting
/// names is not this layer's job. Vendor-extension keys (`prefix:name`)
/// are never rewritten. Returns the translated map plus one notice per
/// renamed key, in input order.
pub fn normalize(legacy: CapabilityMap) -> (CapabilityMap, Vec<DeprecationNotice>) {
    let mut legacy = legacy;
    fold_proxy_type(&mut legacy);

    let mut w3c = CapabilityMap::new();
    let mut notices = Vec::new();
    for (key, value) in legacy {
        if key.contains(':') {
            w3c.insert(key, value);
            continue;
        }
        match translation_for(&key) {
            Some(row) => {
                debug!("Translating legacy capability `{}` to `{}`", key, row.w3c);
                w3c.insert(row.w3c.to_string(), row.apply(value));
                notices.push(DeprecationNotice::new(row.legacy, row.w3c));
            }
            None => {
                w3c.insert(key, value);
            }
        }
    }
    (w3c, notices)
}

/// Case-fold the `proxyType` tag inside a `proxy` capability. Remote ends
/// match the tag case-sensitively against lowercase wire values.
fn fold_proxy_type(caps: &mut CapabilityMap) {
    let proxy = match caps.get_mut("proxy") {
        Some(Value::Object(proxy)) => proxy,
        _ => return,
    };
    if let Some(Value::String(tag)) = proxy.get_mut("proxyType") {
        tag.make_ascii_lowercase();
    }
}

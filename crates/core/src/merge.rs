//! Capability set merging.
//!
//! Folds an ordered list of option records into the W3C new-session
//! `alwaysMatch`/`firstMatch` split. A field carried identically by every
//! record is promoted to `alwaysMatch`; everything record-specific stays
//! in that record's own `firstMatch` entry, in input order. Vendor blocks
//! are never promoted. The merger is a pure function: no state, no I/O,
//! safe to call from any number of concurrent sessions.

use serde_json::Value;
use tracing::debug;

use crate::capabilities::{CapabilitiesPayload, CapabilityMap};
use crate::record::OptionRecord;

/// Merge option records into a new-session capabilities payload.
///
/// With no records the result is the degenerate
/// `{alwaysMatch: {}, firstMatch: [{}]}`. With one record its flat fields
/// all match by definition, so they form `alwaysMatch` wholesale and the
/// single `firstMatch` entry carries only the record's identity (browser
/// name and vendor block). With two or more records, a key is promoted
/// only when every record holds it with a deeply equal value; promotion
/// order follows the first record, so identical input yields
/// byte-identical serialized output. `firstMatch` always has exactly
/// `max(1, records.len())` entries.
pub fn merge(records: &[OptionRecord]) -> CapabilitiesPayload {
    let payload = match records {
        [] => CapabilitiesPayload::empty(),
        [record] => merge_single(record),
        records => merge_many(records),
    };
    debug!(
        "Merged {} record(s): {} shared field(s), {} first-match entries",
        records.len(),
        payload.always_match.len(),
        payload.first_match.len()
    );
    payload
}

fn merge_single(record: &OptionRecord) -> CapabilitiesPayload {
    let mut entry = CapabilityMap::new();
    if let Some(name) = &record.browser_name {
        entry.insert("browserName".to_string(), Value::String(name.clone()));
    }
    if let Some(vendor) = &record.vendor {
        entry.insert(vendor.key.clone(), Value::Object(vendor.caps.clone()));
    }
    CapabilitiesPayload {
        always_match: record.caps.clone(),
        first_match: vec![entry],
    }
}

fn merge_many(records: &[OptionRecord]) -> CapabilitiesPayload {
    let comparable: Vec<CapabilityMap> = records.iter().map(comparable_fields).collect();

    // A key is promoted when every record carries it with a deeply equal
    // value. Iterating the first record's fields fixes the promotion
    // order to first-seen.
    let mut always_match = CapabilityMap::new();
    for (key, value) in &comparable[0] {
        if comparable[1..].iter().all(|fields| fields.get(key) == Some(value)) {
            always_match.insert(key.clone(), value.clone());
        }
    }

    let mut first_match = Vec::with_capacity(records.len());
    for (record, fields) in records.iter().zip(&comparable) {
        let mut entry = CapabilityMap::new();
        for (key, value) in fields {
            if !always_match.contains_key(key) {
                entry.insert(key.clone(), value.clone());
            }
        }
        if let Some(vendor) = &record.vendor {
            entry.insert(vendor.key.clone(), Value::Object(vendor.caps.clone()));
        }
        first_match.push(entry);
    }

    CapabilitiesPayload {
        always_match,
        first_match,
    }
}

/// The record's fields as seen by cross-record comparison: the browser
/// name folded in first, then the flat fields in their own order.
fn comparable_fields(record: &OptionRecord) -> CapabilityMap {
    let mut fields = CapabilityMap::new();
    if let Some(name) = &record.browser_name {
        fields.insert("browserName".to_string(), Value::String(name.clone()));
    }
    for (key, value) in &record.caps {
        fields.insert(key.clone(), value.clone());
    }
    fields
}

pub mod config_cmd;
pub mod merge_cmd;
pub mod normalize_cmd;
pub mod session;

use std::path::{Path, PathBuf};

use capmatch_core::{CapabilityMap, OptionRecord};
use serde_json::Value;

/// Read one JSON value from a file, naming the file in any error.
fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
}

/// Read a file that must hold one flat JSON object of capabilities.
fn read_capability_map(path: &Path) -> anyhow::Result<CapabilityMap> {
    match read_json(path)? {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("{} must hold a JSON object of capabilities", path.display()),
    }
}

/// Read option-record spec files, one JSON object per file.
fn read_records(files: &[PathBuf]) -> anyhow::Result<Vec<OptionRecord>> {
    let mut records = Vec::with_capacity(files.len());
    for file in files {
        let value = read_json(file)?;
        let record = OptionRecord::from_value(value)
            .map_err(|e| anyhow::anyhow!("{}: {}", file.display(), e))?;
        records.push(record);
    }
    Ok(records)
}

/// Print a payload to stdout, pretty or compact per the output config.
fn print_value(value: &Value, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

use std::path::Path;

use capmatch_core::{normalize, Config, Paths};
use serde_json::Value;
use tracing::warn;

use super::{print_value, read_capability_map};

/// Translate a legacy capability map and print its W3C form.
///
/// The translated map goes to stdout; one warning per renamed key goes to
/// stderr, so the output stays pipeable.
pub async fn run(file: &Path) -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;

    let legacy = read_capability_map(file)?;
    let (w3c, notices) = normalize(legacy);
    for notice in &notices {
        warn!("{}", notice);
    }
    print_value(&Value::Object(w3c), config.output.pretty)
}

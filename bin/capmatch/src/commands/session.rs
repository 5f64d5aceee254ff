use std::path::PathBuf;

use capmatch_core::{Config, Paths};
use capmatch_remote::SessionBuilder;

use super::{print_value, read_capability_map, read_records};

/// Build the new-session request body from record spec files and an
/// optional legacy capability map.
///
/// The configured deprecation mode applies: under `strict` a legacy key
/// aborts the command instead of being translated.
pub async fn run(files: Vec<PathBuf>, legacy: Option<PathBuf>) -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;

    let mut builder = SessionBuilder::new().with_deprecation_mode(config.deprecations);
    for record in read_records(&files)? {
        builder = builder.with_record(record);
    }
    if let Some(file) = &legacy {
        builder = builder.with_legacy(read_capability_map(file)?);
    }

    let request = builder.build()?;
    print_value(&request.into_body(), config.output.pretty)
}

use std::path::PathBuf;

use capmatch_core::{merge, Config, Paths};

use super::{print_value, read_records};

/// Merge record spec files into an alwaysMatch/firstMatch payload.
pub async fn run(files: Vec<PathBuf>) -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;

    let records = read_records(&files)?;
    let payload = merge(&records);
    print_value(&serde_json::to_value(&payload)?, config.output.pretty)
}

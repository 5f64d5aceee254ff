use capmatch_core::{Config, Paths};

/// Show the current configuration as pretty-printed JSON.
pub async fn show() -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;

    println!();
    println!("📋 Current Configuration");
    println!("  File: {}", paths.config_file().display());
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Write a default config file.
pub async fn init(force: bool) -> anyhow::Result<()> {
    let paths = Paths::new();
    let config_path = paths.config_file();

    if config_path.exists() && !force {
        eprintln!("Config file already exists: {}", config_path.display());
        eprintln!("Use --force to overwrite.");
        std::process::exit(1);
    }

    let config = Config::default();
    config.save(&config_path)?;
    println!("✓ Wrote default config: {}", config_path.display());
    Ok(())
}

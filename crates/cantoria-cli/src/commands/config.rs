use anyhow::Result;

use cantoria_catalog::{config, Config};

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure cantoria.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!(
        "  provider_url: {}",
        config.provider_url.as_deref().unwrap_or("<not set>")
    );
    println!("  database_path: {}", config.database_path.display());

    println!("\nPriority: CLI args > ENV vars (CANTORIA_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

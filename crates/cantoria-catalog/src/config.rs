use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for cantoria.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CANTORIA_* prefix)
/// 3. Config file (~/.config/cantoria/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the upstream metadata provider (required for the
    /// song creation flow).
    ///
    /// Can be set via:
    /// - ENV: CANTORIA_PROVIDER_URL
    /// - Config: provider_url = "https://..."
    pub provider_url: Option<String>,

    /// Path to the SQLite database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: CANTORIA_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: ~/.local/share/cantoria/cantoria.db
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_url: None,
            database_path: default_db_path(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/cantoria/config.toml
    /// Reads environment variables with CANTORIA_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        // If config file exists, load it
        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("cantoria");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with custom database path.
    ///
    /// This is used when the --db CLI flag is provided.
    pub fn load_with_db_path(db_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.database_path = db_path;
        Ok(config)
    }
}

/// Get the default database path.
///
/// Returns: ~/.local/share/cantoria/cantoria.db (or platform equivalent)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cantoria")
        .join("cantoria.db")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/cantoria/config.toml
/// - macOS: ~/Library/Application Support/cantoria/config.toml
/// - Windows: %APPDATA%\cantoria\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cantoria")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Cantoria Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CANTORIA_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Base URL of the upstream metadata provider
#
# The creation flow queries this endpoint with ?group=<group>&song=<title>
# and expects a JSON object with releaseDate, text, and link fields.
#
# Can also be set via:
# - Environment: CANTORIA_PROVIDER_URL=https://lyrics.example.org/info
#provider_url = "https://lyrics.example.org/info"

# Path to the SQLite database
#
# Stores the song catalog and its details rows.
#
# Can also be set via:
# - CLI: cantoria --db /custom/path.db list
# - Environment: CANTORIA_DATABASE_PATH=/custom/path.db
#
# Default: Platform-specific data directory
#database_path = "/path/to/custom/cantoria.db"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    // Create parent directory
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    // Write default config
    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

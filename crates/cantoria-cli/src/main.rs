use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cantoria_catalog::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cantoria", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database (default: ~/.local/share/cantoria/cantoria.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List catalog songs with filtering and pagination
    ///
    /// Filters are exact matches: --group and --title constrain the
    /// listing to songs whose group/title equal the given value. With
    /// no filter, every song is eligible. Results are ordered by id,
    /// so re-reading a page returns the same rows.
    List {
        /// Filter by exact group name
        #[arg(long)]
        group: Option<String>,

        /// Filter by exact track title
        #[arg(long)]
        title: Option<String>,

        /// Page number (starts from 1)
        #[arg(long, default_value = "1")]
        page: String,

        /// Songs per page
        #[arg(long, default_value = "20")]
        limit: String,
    },
    /// Show a page of verses from a song's lyric text
    Text {
        /// Group name
        group: String,

        /// Song title
        song: String,

        /// Page number (starts from 1)
        #[arg(long, default_value = "1")]
        page: String,

        /// Verses per page
        #[arg(long, default_value = "20")]
        limit: String,
    },
    /// Add a new song, fetching its details from the metadata provider
    Add {
        /// Group name
        group: String,

        /// Song title
        song: String,

        /// Provider base URL (overrides config and environment)
        #[arg(long)]
        provider_url: Option<String>,
    },
    /// Update a song's group and title by its id
    Update {
        /// Surrogate id of the song
        id: String,

        /// New group name
        group: String,

        /// New song title
        song: String,
    },
    /// Delete a song by exact group and title
    Delete {
        /// Group name
        group: String,

        /// Song title
        song: String,
    },
    /// Show catalog status
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Create the config file with defaults
    Init,
    /// Show the current effective configuration
    Show,
    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.db {
        Some(db) => Config::load_with_db_path(db)?,
        None => Config::load()?,
    };

    // Ensure database directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        Commands::List {
            group,
            title,
            page,
            limit,
        } => {
            commands::run_list(&config.database_path, group, title, &page, &limit)?;
        }
        Commands::Text {
            group,
            song,
            page,
            limit,
        } => {
            commands::run_text(&config.database_path, &group, &song, &page, &limit)?;
        }
        Commands::Add {
            group,
            song,
            provider_url,
        } => {
            commands::run_add(&config, group, song, provider_url).await?;
        }
        Commands::Update { id, group, song } => {
            commands::run_update(&config.database_path, &id, &group, &song)?;
        }
        Commands::Delete { group, song } => {
            commands::run_delete(&config.database_path, &group, &song)?;
        }
        Commands::Status => {
            commands::show_status(&config.database_path)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Path => commands::config::show_path()?,
        },
    }

    Ok(())
}

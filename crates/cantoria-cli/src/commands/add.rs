use anyhow::Result;

use cantoria_catalog::{CatalogService, Config, ProviderClient};
use cantoria_core::model::NewSong;
use cantoria_core::schema::Database;

pub async fn run_add(
    config: &Config,
    group: String,
    song: String,
    provider_url: Option<String>,
) -> Result<()> {
    let url = provider_url
        .or_else(|| config.provider_url.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No provider URL configured.\n\n\
                 Set provider_url in the config file, export CANTORIA_PROVIDER_URL,\n\
                 or pass --provider-url."
            )
        })?;

    tracing::info!("Adding {} - {} via {}", group, song, url);

    let db = Database::open(&config.database_path)?;
    let provider = ProviderClient::new(url)?;
    let service = CatalogService::new(db).with_provider(provider);

    let details = service
        .add_song(NewSong::new(group.clone(), song.clone()))
        .await?;

    println!("✓ Added {} - {}", group, song);
    println!("  released: {}", details.release_date);
    println!("  link:     {}", details.link);

    Ok(())
}

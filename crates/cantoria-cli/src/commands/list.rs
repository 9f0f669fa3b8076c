use anyhow::Result;
use std::path::Path;

use cantoria_catalog::CatalogService;
use cantoria_core::model::SongFilter;
use cantoria_core::schema::Database;

pub fn run_list(
    db_path: &Path,
    group: Option<String>,
    title: Option<String>,
    page: &str,
    limit: &str,
) -> Result<()> {
    let db = Database::open(db_path)?;
    let service = CatalogService::new(db);

    let mut filter = SongFilter::new();
    if let Some(group) = group {
        filter = filter.with_group(group);
    }
    if let Some(title) = title {
        filter = filter.with_title(title);
    }

    let songs = service.list_songs(&filter, page, limit)?;

    if songs.is_empty() {
        println!("No songs matched");
        return Ok(());
    }

    for song in &songs {
        println!("  {:>6}  {} - {}", song.id, song.group, song.title);
    }
    println!("\n{} song(s), page {}", songs.len(), page);

    Ok(())
}

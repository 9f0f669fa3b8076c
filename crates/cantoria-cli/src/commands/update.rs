use anyhow::Result;
use std::path::Path;

use cantoria_catalog::CatalogService;
use cantoria_core::schema::Database;

pub fn run_update(db_path: &Path, id: &str, group: &str, song: &str) -> Result<()> {
    let db = Database::open(db_path)?;
    let service = CatalogService::new(db);

    service.update_song(id, group, song)?;

    println!("✓ Updated song {} to {} - {}", id, group, song);

    Ok(())
}

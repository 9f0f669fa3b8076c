use anyhow::Result;
use std::path::Path;

use cantoria_catalog::CatalogService;
use cantoria_core::schema::Database;

pub fn run_delete(db_path: &Path, group: &str, song: &str) -> Result<()> {
    let db = Database::open(db_path)?;
    let service = CatalogService::new(db);

    service.delete_song(group, song)?;

    println!("✓ Deleted {} - {}", group, song);

    Ok(())
}

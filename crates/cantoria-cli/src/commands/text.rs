use anyhow::Result;
use std::path::Path;

use cantoria_catalog::CatalogService;
use cantoria_core::schema::Database;

pub fn run_text(db_path: &Path, group: &str, song: &str, page: &str, limit: &str) -> Result<()> {
    let db = Database::open(db_path)?;
    let service = CatalogService::new(db);

    let verses = service.song_text(group, song, page, limit)?;

    if verses.is_empty() {
        println!("No verses on page {}", page);
        return Ok(());
    }

    println!("{} - {} (page {})\n", group, song, page);
    println!("{}", verses.join("\n\n"));

    Ok(())
}

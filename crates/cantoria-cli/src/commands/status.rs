use anyhow::Result;
use std::path::Path;

use cantoria_core::schema::Database;

pub fn show_status(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let count = db.count_songs()?;

    println!("\n📊 Cantoria Status\n");
    println!("  Database: {}", db_path.display());
    println!("  Songs in catalog: {}", count);

    if count == 0 {
        println!("\n  Run `cantoria add <group> <song>` to add your first song");
    }

    Ok(())
}

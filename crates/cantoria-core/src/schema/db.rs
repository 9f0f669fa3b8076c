use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::Result;
use crate::model::{NewSong, Song, SongDetails, SongFilter};

use super::migrations::MIGRATIONS;

/// A database connection with CRUD methods for the song catalog.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn init(&self) -> Result<()> {
        // Foreign keys are off by default and per-connection; the details
        // cascade on song deletion depends on them.
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.apply_migrations()
    }

    fn apply_migrations(&self) -> Result<()> {
        // Create migrations table if it doesn't exist
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        // Get applied migrations
        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        // Apply pending migrations
        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

// Song CRUD
impl Database {
    /// List songs matching the filter, ordered by surrogate id.
    ///
    /// The explicit ordering key makes paging reproducible across
    /// requests; offset/limit are applied after the filter.
    pub fn list_songs(&self, filter: &SongFilter, limit: i64, offset: i64) -> Result<Vec<Song>> {
        log::debug!(
            "Listing songs (filter: {:?}, limit: {}, offset: {})",
            filter,
            limit,
            offset
        );

        let mut stmt = self.conn.prepare(
            "SELECT id, artist, name, created_at, updated_at
             FROM songs
             WHERE (?1 IS NULL OR artist = ?1) AND (?2 IS NULL OR name = ?2)
             ORDER BY id
             LIMIT ?3 OFFSET ?4",
        )?;

        let songs = stmt
            .query_map(
                params![filter.group, filter.title, limit, offset],
                row_to_song,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(songs)
    }

    /// Look up the metadata row joined through the song's identity pair.
    ///
    /// Returns `None` when no matching song/details pair exists.
    pub fn get_song_details(&self, group: &str, title: &str) -> Result<Option<SongDetails>> {
        let details = self
            .conn
            .query_row(
                "SELECT d.release_date, d.text, d.link
                 FROM song_details d
                 JOIN songs s ON s.id = d.song_id
                 WHERE s.artist = ?1 AND s.name = ?2",
                params![group, title],
                |row| {
                    Ok(SongDetails {
                        release_date: row.get(0)?,
                        text: row.get(1)?,
                        link: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(details)
    }

    /// Insert a song together with its details as a single atomic unit.
    ///
    /// Both rows appear or neither does: if the details insert fails the
    /// transaction rolls the song row back. Returns the generated
    /// surrogate id.
    pub fn insert_song(&self, song: &NewSong, details: &SongDetails) -> Result<i64> {
        log::debug!("Inserting song {} - {}", song.group, song.title);

        let tx = self.conn.unchecked_transaction()?;
        let now = Utc::now().to_rfc3339();

        tx.execute(
            "INSERT INTO songs (artist, name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![song.group, song.title, now, now],
        )?;
        let id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO song_details (song_id, release_date, text, link)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, details.release_date, details.text, details.link],
        )?;

        tx.commit()?;
        Ok(id)
    }

    /// Update the identity fields of the song with the given surrogate id.
    ///
    /// Returns the number of rows affected; zero means no song has that
    /// id, which callers report distinctly from an engine failure.
    pub fn update_song(&self, id: i64, group: &str, title: &str) -> Result<usize> {
        log::debug!("Updating song {} to {} - {}", id, group, title);

        let affected = self.conn.execute(
            "UPDATE songs SET artist = ?1, name = ?2, updated_at = ?3 WHERE id = ?4",
            params![group, title, Utc::now().to_rfc3339(), id],
        )?;

        Ok(affected)
    }

    /// Delete the song matching the exact identity pair.
    ///
    /// The details row cascades. Returns the number of rows affected;
    /// zero means no such song existed.
    pub fn delete_song(&self, group: &str, title: &str) -> Result<usize> {
        log::debug!("Deleting song {} - {}", group, title);

        let affected = self.conn.execute(
            "DELETE FROM songs WHERE artist = ?1 AND name = ?2",
            params![group, title],
        )?;

        Ok(affected)
    }

    /// Total number of songs in the catalog.
    pub fn count_songs(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_song(row: &rusqlite::Row) -> rusqlite::Result<Song> {
    Ok(Song {
        id: row.get(0)?,
        group: row.get(1)?,
        title: row.get(2)?,
        created_at: parse_timestamp(3, &row.get::<_, String>(3)?)?,
        updated_at: parse_timestamp(4, &row.get::<_, String>(4)?)?,
    })
}

fn parse_timestamp(idx: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> SongDetails {
        SongDetails::new(
            "2003-09-15",
            "Verse one\n\nVerse two\n\nVerse three",
            "https://example.org/v/1",
        )
    }

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        // Verify migrations table exists
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 1); // One migration applied
    }

    #[test]
    fn test_migrations_idempotent_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");

        {
            let db = Database::open(&path).unwrap();
            db.insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
                .unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.count_songs().unwrap(), 1);
        let migrations: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(migrations, 1);
    }

    #[test]
    fn test_insert_and_list_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let id = db
            .insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
            .unwrap();

        let songs = db.list_songs(&SongFilter::new(), 10, 0).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, id);
        assert_eq!(songs[0].group, "Muse");
        assert_eq!(songs[0].title, "Hysteria");
    }

    #[test]
    fn test_insert_writes_both_rows() {
        let db = Database::open_in_memory().unwrap();
        let id = db
            .insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
            .unwrap();

        let details: i64 = db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM song_details WHERE song_id = ?1",
                [id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(details, 1);
    }

    #[test]
    fn test_duplicate_identity_rejected_without_partial_rows() {
        let db = Database::open_in_memory().unwrap();
        db.insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
            .unwrap();

        let result = db.insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details());
        assert!(result.is_err());

        // The failed creation must not leave any partial state behind.
        assert_eq!(db.count_songs().unwrap(), 1);
        let details: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM song_details", [], |row| row.get(0))
            .unwrap();
        assert_eq!(details, 1);
    }

    #[test]
    fn test_list_songs_exact_match_filter() {
        let db = Database::open_in_memory().unwrap();
        db.insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
            .unwrap();
        db.insert_song(&NewSong::new("Muse", "Uprising"), &sample_details())
            .unwrap();
        db.insert_song(&NewSong::new("Queen", "Hysteria"), &sample_details())
            .unwrap();

        let by_group = db
            .list_songs(&SongFilter::new().with_group("Muse"), 10, 0)
            .unwrap();
        assert_eq!(by_group.len(), 2);

        let by_both = db
            .list_songs(
                &SongFilter::new().with_group("Muse").with_title("Hysteria"),
                10,
                0,
            )
            .unwrap();
        assert_eq!(by_both.len(), 1);
        assert_eq!(by_both[0].group, "Muse");

        // Exact match only: no substring matching.
        let partial = db
            .list_songs(&SongFilter::new().with_group("Mus"), 10, 0)
            .unwrap();
        assert!(partial.is_empty());
    }

    #[test]
    fn test_list_songs_paging_is_ordered_by_id() {
        let db = Database::open_in_memory().unwrap();
        for n in 0..5 {
            db.insert_song(&NewSong::new("Muse", format!("Track {n}")), &sample_details())
                .unwrap();
        }

        let first = db.list_songs(&SongFilter::new(), 2, 0).unwrap();
        let second = db.list_songs(&SongFilter::new(), 2, 2).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert!(first[1].id < second[0].id);

        // Re-reading a page yields the same rows.
        let again = db.list_songs(&SongFilter::new(), 2, 0).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_get_song_details_join() {
        let db = Database::open_in_memory().unwrap();
        db.insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
            .unwrap();

        let details = db.get_song_details("Muse", "Hysteria").unwrap();
        assert_eq!(details, Some(sample_details()));

        let missing = db.get_song_details("Muse", "Unknown").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_delete_song_reports_affected_rows() {
        let db = Database::open_in_memory().unwrap();
        db.insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
            .unwrap();

        assert_eq!(db.delete_song("Muse", "Hysteria").unwrap(), 1);
        // Second delete affects nothing.
        assert_eq!(db.delete_song("Muse", "Hysteria").unwrap(), 0);
    }

    #[test]
    fn test_delete_song_cascades_details() {
        let db = Database::open_in_memory().unwrap();
        db.insert_song(&NewSong::new("Muse", "Hysteria"), &sample_details())
            .unwrap();
        db.delete_song("Muse", "Hysteria").unwrap();

        let details: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM song_details", [], |row| row.get(0))
            .unwrap();
        assert_eq!(details, 0);
    }

    #[test]
    fn test_update_song_by_id() {
        let db = Database::open_in_memory().unwrap();
        let id = db
            .insert_song(&NewSong::new("Muse", "Histeria"), &sample_details())
            .unwrap();

        assert_eq!(db.update_song(id, "Muse", "Hysteria").unwrap(), 1);
        let songs = db
            .list_songs(&SongFilter::new().with_title("Hysteria"), 10, 0)
            .unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, id);

        // Unknown id affects nothing.
        assert_eq!(db.update_song(9999, "Muse", "Hysteria").unwrap(), 0);
    }
}

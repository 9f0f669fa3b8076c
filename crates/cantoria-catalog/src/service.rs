//! The catalog service facade.
//!
//! Composes the paginator, the verse chunker, the storage layer, and
//! the upstream provider client behind the surface a transport layer
//! consumes. Every operation validates its request parameters before
//! issuing a storage call.

use cantoria_core::model::{NewSong, Song, SongDetails, SongFilter};
use cantoria_core::schema::Database;

use crate::error::{CatalogError, CatalogResult};
use crate::page::PageParams;
use crate::provider::{ProviderClient, PROVIDER_NAME};
use crate::verses;

/// The facade consumed by transport layers.
///
/// Collaborators are injected explicitly: the storage handle at
/// construction, the provider client (needed only by the creation
/// flow) via [`with_provider`].
///
/// [`with_provider`]: CatalogService::with_provider
#[derive(Debug)]
pub struct CatalogService {
    db: Database,
    provider: Option<ProviderClient>,
}

impl CatalogService {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db, provider: None }
    }

    #[must_use]
    pub fn with_provider(mut self, provider: ProviderClient) -> Self {
        self.provider = Some(provider);
        self
    }

    /// List songs matching the filter, paged and ordered by id.
    pub fn list_songs(
        &self,
        filter: &SongFilter,
        page: &str,
        limit: &str,
    ) -> CatalogResult<Vec<Song>> {
        let pages = PageParams::parse(page, limit)?;
        let songs = self.db.list_songs(filter, pages.limit(), pages.offset())?;
        log::debug!("Listed {} songs (page {})", songs.len(), pages.page());
        Ok(songs)
    }

    /// Return the requested page of verses from a song's lyric text.
    pub fn song_text(
        &self,
        group: &str,
        title: &str,
        page: &str,
        limit: &str,
    ) -> CatalogResult<Vec<String>> {
        let pages = PageParams::parse(page, limit)?;

        let details = self
            .db
            .get_song_details(group, title)?
            .ok_or_else(|| CatalogError::not_found(format!("song {group} - {title}")))?;

        Ok(verses::paginate_verses(&details.text, &pages))
    }

    /// Create a song, fetching its details from the upstream provider.
    ///
    /// On upstream failure the flow aborts before any write reaches
    /// storage; on success the song row and its details row are
    /// written as one atomic unit.
    pub async fn add_song(&self, song: NewSong) -> CatalogResult<SongDetails> {
        require_identity(&song.group, &song.title)?;

        let provider = self.provider.as_ref().ok_or_else(|| CatalogError::Upstream {
            source_name: PROVIDER_NAME.to_string(),
            message: "no provider configured".to_string(),
        })?;

        let details = provider.fetch_details(&song.group, &song.title).await?;

        let id = self.db.insert_song(&song, &details)?;
        log::info!("Added song {} - {} (id {})", song.group, song.title, id);

        Ok(details)
    }

    /// Update a song's identity fields by surrogate id.
    ///
    /// The id must parse as a non-negative integer; zero affected rows
    /// is reported as not-found, distinct from an engine failure.
    pub fn update_song(&self, id: &str, group: &str, title: &str) -> CatalogResult<()> {
        let id_n: i64 = id.parse().map_err(|_| CatalogError::validation("id", id))?;
        if id_n < 0 {
            return Err(CatalogError::validation("id", id));
        }
        require_identity(group, title)?;

        match self.db.update_song(id_n, group, title)? {
            0 => Err(CatalogError::not_found(format!("song id {id_n}"))),
            _ => Ok(()),
        }
    }

    /// Delete the song matching the exact identity pair.
    pub fn delete_song(&self, group: &str, title: &str) -> CatalogResult<()> {
        match self.db.delete_song(group, title)? {
            0 => Err(CatalogError::not_found(format!("song {group} - {title}"))),
            _ => Ok(()),
        }
    }

    /// Total number of songs in the catalog.
    pub fn count_songs(&self) -> CatalogResult<i64> {
        Ok(self.db.count_songs()?)
    }
}

/// A song's identity pair must be non-empty once persisted.
fn require_identity(group: &str, title: &str) -> CatalogResult<()> {
    if group.is_empty() {
        return Err(CatalogError::validation("group", group));
    }
    if title.is_empty() {
        return Err(CatalogError::validation("song", title));
    }
    Ok(())
}

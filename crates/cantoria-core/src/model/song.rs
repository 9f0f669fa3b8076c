use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song persisted in the catalog.
///
/// The natural key is the (group, title) pair; `id` is the surrogate
/// identifier generated by the store at creation time and used to link
/// the song to its [`SongDetails`] row.
///
/// [`SongDetails`]: crate::model::SongDetails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,

    /// Performing group or artist name.
    pub group: String,

    /// Track title. Serialized as `song` on the wire.
    #[serde(rename = "song")]
    pub title: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input for a song: the identity pair only.
///
/// The surrogate id and the metadata row are produced during the
/// creation flow, not supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub group: String,

    #[serde(rename = "song")]
    pub title: String,
}

impl NewSong {
    #[must_use]
    pub fn new(group: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            title: title.into(),
        }
    }
}

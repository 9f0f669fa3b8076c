use serde::{Deserialize, Serialize};

/// Metadata attached to exactly one song.
///
/// The lyric text is stored as an opaque blob; verses within it are
/// separated by a blank line. The release date is kept as the string the
/// upstream provider returned, since providers disagree on date formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetails {
    #[serde(rename = "releaseDate")]
    pub release_date: String,

    /// Full lyric text, verses separated by a blank line.
    pub text: String,

    /// External link (e.g. a video URL).
    pub link: String,
}

impl SongDetails {
    #[must_use]
    pub fn new(
        release_date: impl Into<String>,
        text: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            release_date: release_date.into(),
            text: text.into(),
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_wire_names() {
        let details = SongDetails::new(
            "2003-09-15",
            "It's bugging me, grating me",
            "https://www.youtube.com/watch?v=3dm_5qWWDV8",
        );
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["releaseDate"], "2003-09-15");
        assert_eq!(json["text"], "It's bugging me, grating me");
        assert!(json["link"].as_str().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_details_deserialize_provider_payload() {
        let json = r#"{
            "releaseDate": "2006-07-16",
            "text": "Ooh baby, don't you know I suffer?\n\nOoh baby, can you hear me moan?",
            "link": "https://example.org/watch?v=Xsp3_a-PMTw"
        }"#;
        let details: SongDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.release_date, "2006-07-16");
        assert!(details.text.contains("\n\n"));
    }
}

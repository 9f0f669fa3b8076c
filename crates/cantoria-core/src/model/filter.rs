use serde::{Deserialize, Serialize};

/// Filter over the song catalog.
///
/// Each field is an explicit option: `None` leaves that component
/// unconstrained, `Some(value)` requires an exact match. No substring
/// matching and no case normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFilter {
    pub group: Option<String>,
    pub title: Option<String>,
}

impl SongFilter {
    /// A filter that matches every song.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build a filter from raw query terms, where the empty string means
    /// "unconstrained". This is the convention transport layers use on
    /// the wire; inside the catalog the distinction is kept explicit.
    #[must_use]
    pub fn from_terms(group: &str, title: &str) -> Self {
        Self {
            group: (!group.is_empty()).then(|| group.to_string()),
            title: (!title.is_empty()).then(|| title.to_string()),
        }
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.group.is_none() && self.title.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_default_matches_all() {
        let filter = SongFilter::new();
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_filter_builder() {
        let filter = SongFilter::new().with_group("Muse").with_title("Hysteria");
        assert_eq!(filter.group.as_deref(), Some("Muse"));
        assert_eq!(filter.title.as_deref(), Some("Hysteria"));
        assert!(!filter.is_unconstrained());
    }

    #[test]
    fn test_from_terms_empty_means_unconstrained() {
        let filter = SongFilter::from_terms("", "");
        assert!(filter.is_unconstrained());

        let filter = SongFilter::from_terms("Muse", "");
        assert_eq!(filter.group.as_deref(), Some("Muse"));
        assert!(filter.title.is_none());
    }
}

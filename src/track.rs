use serde::{Deserialize, Serialize};

/// One extracted track entry: a cleaned title and a joined artist string.
///
/// Records are created once during extraction and never mutated afterwards.
/// Both fields are always present; an entry that lists no artists still
/// produces a record, with an empty `artist` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Headline text of the entry, with quote characters stripped.
    pub title: String,
    /// All artist names for the entry, joined with `", "` in source order.
    pub artist: String,
}

impl TrackRecord {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// The synthetic header record prepended to every result set.
    ///
    /// This is a tabular-export convention (column names as the first row),
    /// not semantic track data.
    pub fn header() -> Self {
        Self::new("title", "artist")
    }
}

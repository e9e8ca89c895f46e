use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a rendered track row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// One entry of the bundled catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackEntry {
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default, alias = "src", alias = "sourceURL")]
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub playlist: Vec<TrackEntry>,
}

/// A displayable track row. The player only reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    pub id: RowId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub source_url: String,
}

impl TrackRow {
    pub fn has_source(&self) -> bool {
        !self.source_url.trim().is_empty()
    }

    /// Title as shown in the footer; empty titles read as "Unknown".
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Unknown"
        } else {
            &self.title
        }
    }

    /// Lowercased title, artist and album, in that order.
    pub fn search_fields(&self) -> [String; 3] {
        [
            self.title.to_lowercase(),
            self.artist.to_lowercase(),
            self.album.to_lowercase(),
        ]
    }
}

//! Track catalog backing the rendered pages.
//!
//! The catalog is the "markup" the player scans: each page exposes an ordered
//! list of rows, and only the playlist page carries tracks.

pub mod models;

pub use models::*;

use crate::player::AppView;
use thiserror::Error;

const BUNDLED_PLAYLIST: &str = include_str!("../../assets/playlist.json");

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
    playlist: Vec<TrackRow>,
}

impl Library {
    /// Load the catalog shipped with the app.
    pub fn bundled() -> Result<Self, LibraryError> {
        Self::from_json(BUNDLED_PLAYLIST)
    }

    pub fn from_json(raw: &str) -> Result<Self, LibraryError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        Ok(Self::from_entries(catalog.playlist))
    }

    pub fn from_entries(entries: Vec<TrackEntry>) -> Self {
        let playlist = entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| TrackRow {
                id: RowId(idx as u32),
                title: entry.title,
                artist: entry.artist,
                album: entry.album,
                source_url: entry.source_url,
            })
            .collect();
        Self { playlist }
    }

    /// Rows rendered on `view`, in display order.
    pub fn rows_for(&self, view: AppView) -> &[TrackRow] {
        match view {
            AppView::Playlist => self.playlist.as_slice(),
            AppView::Home | AppView::Search => &[],
        }
    }

    pub fn track_count(&self) -> usize {
        self.playlist.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let library = Library::bundled().expect("bundled catalog");
        assert!(library.track_count() > 0);
        assert!(library.rows_for(AppView::Playlist).iter().all(|row| row.has_source()));
    }

    #[test]
    fn row_ids_follow_catalog_order() {
        let library = Library::from_json(
            r#"{"playlist":[{"title":"A","src":"a.mp3"},{"name":"B","sourceURL":"b.mp3"}]}"#,
        )
        .expect("catalog");
        let rows = library.rows_for(AppView::Playlist);
        assert_eq!(rows[0].id, RowId(0));
        assert_eq!(rows[1].id, RowId(1));
        assert_eq!(rows[1].title, "B");
        assert_eq!(rows[1].source_url, "b.mp3");
    }

    #[test]
    fn other_pages_have_no_rows() {
        let library = Library::bundled().expect("bundled catalog");
        assert!(library.rows_for(AppView::Home).is_empty());
        assert!(library.rows_for(AppView::Search).is_empty());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = Library::from_json("{\"playlist\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse catalog"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let library = Library::from_json(r#"{"playlist":[{}]}"#).expect("catalog");
        let row = &library.rows_for(AppView::Playlist)[0];
        assert!(!row.has_source());
        assert_eq!(row.display_title(), "Unknown");
    }
}

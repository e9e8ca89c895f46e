use std::collections::HashMap;

use crate::library::{RowId, TrackRow};

/// Rows of the visible page, in display order, plus the active highlight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaylistView {
    rows: Vec<TrackRow>,
    active: Option<usize>,
}

impl PlaylistView {
    pub fn new(rows: Vec<TrackRow>) -> Self {
        Self { rows, active: None }
    }

    pub fn rows(&self) -> &[TrackRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&TrackRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highlight `index`; every other row is inactive.
    pub fn set_active(&mut self, index: usize) {
        self.active = (index < self.rows.len()).then_some(index);
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active_row(&self) -> Option<RowId> {
        self.active.and_then(|idx| self.rows.get(idx)).map(|row| row.id)
    }
}

/// Click bindings keyed by row identity.
///
/// Each refresh builds a fresh table and drops the old one, so a row never
/// carries more than one handler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowBindings {
    by_row: HashMap<RowId, usize>,
}

impl RowBindings {
    pub fn bind(rows: &[TrackRow]) -> Self {
        let by_row = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (row.id, idx))
            .collect();
        Self { by_row }
    }

    /// Playlist index a click on `row` should play.
    pub fn resolve(&self, row: RowId) -> Option<usize> {
        self.by_row.get(&row).copied()
    }

    pub fn len(&self) -> usize {
        self.by_row.len()
    }
}

//! Text filter over the visible playlist rows.
//!
//! A linear scan with lowercase substring matching on title, artist and
//! album. Results keep playlist order; there is no ranking.

use crate::library::{RowId, TrackRow};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty query; shows the prompt text.
    Prompt(String),
    NoResults(String),
    Matches(Vec<SearchHit>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Position of the matching row in the playlist at search time.
    pub index: usize,
    pub row: RowId,
    pub label: String,
}

pub fn filter_rows(
    rows: &[TrackRow],
    query: &str,
    prompt: &str,
    no_results: &str,
) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::Prompt(prompt.to_string());
    }

    let hits: Vec<SearchHit> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row.search_fields()
                .iter()
                .any(|field| field.contains(&needle))
        })
        .map(|(index, row)| SearchHit {
            index,
            row: row.id,
            label: format!("{} — {}", row.title, row.artist),
        })
        .collect();

    if hits.is_empty() {
        SearchOutcome::NoResults(no_results.to_string())
    } else {
        SearchOutcome::Matches(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PROMPT: &str = "prompt";
    const NONE: &str = "No results";

    fn rows() -> Vec<TrackRow> {
        [
            ("Morning Static", "The Low Bands", "Frequencies"),
            ("Glasshouse", "Mara Lind", "Northern Rooms"),
            ("Copper Wire", "The Low Bands", "Frequencies"),
        ]
        .into_iter()
        .enumerate()
        .map(|(idx, (title, artist, album))| TrackRow {
            id: RowId(idx as u32 + 10),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            source_url: format!("{idx}.mp3"),
        })
        .collect()
    }

    fn indices(outcome: &SearchOutcome) -> Vec<usize> {
        match outcome {
            SearchOutcome::Matches(hits) => hits.iter().map(|hit| hit.index).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn empty_query_prompts() {
        assert_eq!(
            filter_rows(&rows(), "", PROMPT, NONE),
            SearchOutcome::Prompt(PROMPT.to_string())
        );
        assert_eq!(
            filter_rows(&[], "   ", PROMPT, NONE),
            SearchOutcome::Prompt(PROMPT.to_string())
        );
    }

    #[test]
    fn no_match_reports_no_results() {
        assert_eq!(
            filter_rows(&rows(), "zzz", PROMPT, NONE),
            SearchOutcome::NoResults(NONE.to_string())
        );
    }

    #[test]
    fn matches_keep_playlist_order() {
        let outcome = filter_rows(&rows(), "low bands", PROMPT, NONE);
        assert_eq!(indices(&outcome), vec![0, 2]);
    }

    #[test]
    fn album_and_artist_are_searched() {
        assert_eq!(indices(&filter_rows(&rows(), "northern", PROMPT, NONE)), vec![1]);
        assert_eq!(indices(&filter_rows(&rows(), "lind", PROMPT, NONE)), vec![1]);
    }

    #[test]
    fn hits_carry_label_and_row() {
        let SearchOutcome::Matches(hits) = filter_rows(&rows(), "copper", PROMPT, NONE) else {
            panic!("expected matches");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].row, RowId(12));
        assert_eq!(hits[0].label, "Copper Wire — The Low Bands");
    }

    proptest! {
        #[test]
        fn case_does_not_change_matches(query in "[a-zA-Z ]{0,8}") {
            let upper = filter_rows(&rows(), &query.to_uppercase(), PROMPT, NONE);
            let lower = filter_rows(&rows(), &query.to_lowercase(), PROMPT, NONE);
            prop_assert_eq!(upper, lower);
        }

        #[test]
        fn every_hit_contains_the_query(query in "[a-z]{1,3}") {
            let data = rows();
            for idx in indices(&filter_rows(&data, &query, PROMPT, NONE)) {
                let fields = data[idx].search_fields();
                prop_assert!(fields.iter().any(|field| field.contains(&query)));
            }
        }
    }
}

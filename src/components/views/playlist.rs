use crate::components::ControllerSignal;
use crate::library::TrackRow;
use crate::player::AppView;
use dioxus::prelude::*;

#[component]
pub fn PlaylistPage() -> Element {
    let controller = use_context::<ControllerSignal>().0;
    let rows: Vec<(TrackRow, bool)> = {
        let player = controller.read();
        let active = player.playlist().active_row();
        player
            .library()
            .rows_for(AppView::Playlist)
            .iter()
            .map(|row| (row.clone(), active == Some(row.id)))
            .collect()
    };

    rsx! {
        div { class: "page-playlist",
            header { class: "page-header",
                h1 { class: "page-title", "Playlist" }
            }
            if rows.is_empty() {
                p { class: "empty-state", "No tracks to show." }
            } else {
                div { class: "song-list",
                    for (index , (row , active)) in rows.iter().enumerate() {
                        SongRow {
                            key: "{row.id}",
                            row: row.clone(),
                            index,
                            active: *active,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SongRow(row: TrackRow, index: usize, active: bool) -> Element {
    let mut controller = use_context::<ControllerSignal>().0;
    let row_id = row.id;
    let class = if active { "song-row active" } else { "song-row" };
    let position = index + 1;

    rsx! {
        div {
            class: "{class}",
            "data-src": "{row.source_url}",
            onclick: move |_| controller.write().activate_row(row_id),
            span { class: "song-index", "{position}" }
            span { class: "song-name", "{row.title}" }
            span { class: "song-artist", "{row.artist}" }
            span { class: "song-album", "{row.album}" }
        }
    }
}

use crate::components::{ControllerSignal, Icon};
use crate::player::SearchOutcome;
use dioxus::prelude::*;

#[component]
pub fn SearchPage() -> Element {
    let mut controller = use_context::<ControllerSignal>().0;
    let mut search_query = use_signal(String::new);
    let outcome = controller.read().search_outcome().clone();

    rsx! {
        div { class: "page-search",
            header { class: "page-header",
                h1 { class: "page-title", "Search" }

                // Search input
                div { class: "search-box",
                    Icon { name: "search".to_string(), class: "search-icon".to_string() }
                    input {
                        id: "searchInput",
                        class: "search-input",
                        placeholder: "Search title, artist or album...",
                        value: search_query,
                        oninput: move |e| {
                            let value = e.value();
                            controller.write().filter_tracks(&value);
                            search_query.set(value);
                        },
                    }
                }
            }

            div { id: "searchResults", class: "search-results",
                {
                    match outcome {
                        SearchOutcome::Prompt(text) | SearchOutcome::NoResults(text) => rsx! {
                            p { class: "search-message", "{text}" }
                        },
                        SearchOutcome::Matches(hits) => rsx! {
                            for hit in hits {
                                div {
                                    key: "{hit.row}",
                                    class: "search-result",
                                    onclick: {
                                        let hit = hit.clone();
                                        move |_| controller.write().choose_search_hit(&hit)
                                    },
                                    "{hit.label}"
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

use crate::components::ControllerSignal;
use crate::player::AppView;
use dioxus::prelude::*;

#[component]
pub fn HomePage() -> Element {
    let mut controller = use_context::<ControllerSignal>().0;
    let track_count = controller.read().library().track_count();

    rsx! {
        div { class: "page-home",
            header { class: "page-header",
                h1 { class: "page-title", "Welcome back" }
                p { class: "page-subtitle", "{track_count} tracks in your playlist." }
            }
            div { class: "home-actions",
                button {
                    r#type: "button",
                    class: "home-action",
                    onclick: move |_| controller.write().show_view(AppView::Playlist),
                    "Open playlist"
                }
                button {
                    r#type: "button",
                    class: "home-action",
                    onclick: move |_| controller.write().show_view(AppView::Search),
                    "Search tracks"
                }
            }
        }
    }
}

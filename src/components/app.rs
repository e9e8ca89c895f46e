use crate::components::views::{HomePage, PlaylistPage, SearchPage};
use crate::components::{AudioController, ControllerSignal, PlatformAudio, Player, Sidebar};
use crate::library::Library;
use crate::player::{AppView, PlayerController};
use crate::settings::load_settings;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn AppShell() -> Element {
    let mut controller = use_signal(|| {
        let settings = load_settings();
        let library = Library::bundled().unwrap_or_else(|err| {
            warn!("starting with an empty playlist: {err}");
            Library::default()
        });
        PlayerController::new(PlatformAudio::new(), library, settings)
    });

    use_context_provider(|| ControllerSignal(controller));

    // Scan rows and apply settings once the tree has mounted.
    use_effect(move || {
        controller.write().bootstrap();
    });

    let player = controller.read();
    let page_style = |view: AppView| {
        if player.is_page_visible(view) {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    rsx! {
        div { class: "app-shell",
            Sidebar {}
            main { class: "app-main",
                section { id: "page-home", class: "page", style: page_style(AppView::Home),
                    HomePage {}
                }
                section {
                    id: "page-playlist",
                    class: "page",
                    style: page_style(AppView::Playlist),
                    PlaylistPage {}
                }
                section {
                    id: "page-search",
                    class: "page",
                    style: page_style(AppView::Search),
                    SearchPage {}
                }
            }
            Player {}
            AudioController {}
        }
    }
}

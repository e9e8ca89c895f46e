use dioxus::prelude::*;
use crate::components::{ControllerSignal, Icon};
use crate::player::{view_label, AppView};

#[component]
pub fn Sidebar() -> Element {
    let controller = use_context::<ControllerSignal>().0;
    let active = controller.read().active_page();
    let track_count = controller.read().library().track_count();
    let items: Vec<(&'static str, &'static str, &'static str, bool)> = AppView::ALL
        .into_iter()
        .map(|view| (view.page_id(), view_label(view), nav_icon(view), active == view))
        .collect();

    rsx! {
        aside { class: "sidebar menu",
            // Logo
            div { class: "sidebar-logo",
                div { class: "sidebar-logo-mark", "P" }
                div {
                    h1 { class: "sidebar-title", "Playdeck" }
                    p { class: "sidebar-subtitle", "{track_count} tracks" }
                }
            }

            nav {
                ul {
                    for (page , label , icon , is_active) in items {
                        NavItem {
                            key: "{page}",
                            icon,
                            page,
                            label,
                            active: is_active,
                        }
                    }
                }
            }
        }
    }
}

fn nav_icon(view: AppView) -> &'static str {
    match view {
        AppView::Home => "home",
        AppView::Playlist => "playlist",
        AppView::Search => "search",
    }
}

#[component]
fn NavItem(icon: String, page: String, label: String, active: bool) -> Element {
    let mut controller = use_context::<ControllerSignal>().0;
    let class = if active { "nav-item active" } else { "nav-item" };
    let target = page.clone();

    rsx! {
        li {
            a {
                class: "{class}",
                href: "#",
                "data-page": "{page}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    controller.write().show_page(&target);
                },
                Icon { name: icon.clone(), class: "nav-icon".to_string() }
                span { "{label}" }
            }
        }
    }
}

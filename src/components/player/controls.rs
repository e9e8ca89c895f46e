use crate::components::{ControllerSignal, Icon};
use crate::player::PlayPauseIcon;
use dioxus::prelude::*;

const PLAY_ICON: Asset = asset!("/assets/icons/Play.svg");
const PAUSE_ICON: Asset = asset!("/assets/icons/Pause.svg");

fn icon_asset(icon: PlayPauseIcon) -> Asset {
    match icon {
        PlayPauseIcon::Play => PLAY_ICON,
        PlayPauseIcon::Pause => PAUSE_ICON,
    }
}

/// Play/Pause button - the icon follows the element's play/pause events
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<ControllerSignal>().0;
    let icon = controller.read().footer().icon;

    rsx! {
        button {
            id: "playPauseBtn",
            r#type: "button",
            class: "transport-main",
            onclick: move |_| controller.write().toggle_play_pause(),
            img {
                id: "playPauseIcon",
                src: icon_asset(icon),
                alt: icon.asset_name(),
                class: "w-5 h-5",
            }
        }
    }
}

/// Previous button - stays on the first track
#[component]
pub(super) fn PrevButton() -> Element {
    let mut controller = use_context::<ControllerSignal>().0;

    rsx! {
        button {
            id: "prevBtn",
            r#type: "button",
            class: "transport-step",
            onclick: move |_| controller.write().previous(),
            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Next button - stays on the last track
#[component]
pub(super) fn NextButton() -> Element {
    let mut controller = use_context::<ControllerSignal>().0;

    rsx! {
        button {
            id: "nextBtn",
            r#type: "button",
            class: "transport-step",
            onclick: move |_| controller.write().next(),
            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

use crate::components::{ControllerSignal, Icon};
use crate::player::PlaybackPhase;
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton};

#[component]
pub fn Player() -> Element {
    let mut controller = use_context::<ControllerSignal>().0;

    let (footer, volume, playback_error, phase) = {
        let player = controller.read();
        (
            player.footer().clone(),
            player.playback().volume,
            player.playback().last_error.clone(),
            player.phase(),
        )
    };
    let state = match phase {
        PlaybackPhase::Idle => "idle",
        PlaybackPhase::LoadedPaused => "paused",
        PlaybackPhase::LoadedPlaying => "playing",
    };

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            controller.write().seek(percent / 100.0);
        }
    };

    let on_volume_input = move |e: Event<FormData>| {
        if let Ok(level) = e.value().parse::<f64>() {
            controller.write().set_volume(level);
        }
    };

    rsx! {
        if let Some(error) = playback_error {
            div { class: "playback-error", role: "alert",
                span { "{error}" }
                button {
                    r#type: "button",
                    class: "playback-error-dismiss",
                    onclick: move |_| controller.write().dismiss_error(),
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }
        footer { class: "player-shell", "data-state": state,
            // Now playing
            div { class: "now-playing",
                p { id: "footerSongName", class: "now-playing-title", "{footer.title}" }
                p { id: "footerSongArtist", class: "now-playing-artist", "{footer.artist}" }
            }

            // Transport
            div { class: "transport",
                div { class: "transport-buttons",
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                }
                div { class: "transport-progress",
                    span { id: "currentTime", class: "time-label", "{footer.elapsed}" }
                    input {
                        id: "progress",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: "{footer.progress}",
                        oninput: on_seek_input,
                    }
                    span { id: "durationTime", class: "time-label", "{footer.duration}" }
                }
            }

            // Volume
            div { class: "volume",
                input {
                    id: "volume",
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{volume}",
                    oninput: on_volume_input,
                }
            }
        }
    }
}

//! Audio Manager - binds the player core to the platform audio element.
//! Media callbacks are queued as [`MediaEvent`]s and applied on the next tick
//! so they never re-enter a controller borrow.

use dioxus::prelude::*;

use crate::player::PlayerController;

#[cfg(target_arch = "wasm32")]
mod web_audio;
#[cfg(target_arch = "wasm32")]
pub use web_audio::{AudioController, PlatformAudio};

#[cfg(not(target_arch = "wasm32"))]
mod bridge_audio;
#[cfg(not(target_arch = "wasm32"))]
pub use bridge_audio::{AudioController, PlatformAudio};

pub type AppController = PlayerController<PlatformAudio>;

/// Context handle for the single player controller.
#[derive(Clone, Copy)]
pub struct ControllerSignal(pub Signal<AppController>);

//! Player core: the controller, its state and the media engine seam.
//!
//! Nothing in here touches the DOM; the components layer renders controller
//! state and forwards input and media callbacks into it.

mod controller;
pub mod engine;
mod events;
mod pages;
mod rows;
mod search;
mod state;

pub use controller::*;
pub use engine::MediaEngine;
pub use events::*;
pub use pages::*;
pub use rows::*;
pub use search::*;
pub use state::*;

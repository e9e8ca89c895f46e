//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod icons;
mod player;
mod sidebar;
pub mod views;

pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;
// Views are accessed via views::ViewName

mod home;
mod playlist;
mod search;

pub use home::HomePage;
pub use playlist::PlaylistPage;
pub use search::SearchPage;

use super::MediaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    LoadedPaused,
    LoadedPlaying,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_index: Option<usize>,
    pub is_playing: bool,
    pub current_time_seconds: f64,
    pub duration_seconds: f64,
    pub volume: f64,
    pub last_error: Option<MediaError>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: None,
            is_playing: false,
            current_time_seconds: 0.0,
            duration_seconds: 0.0,
            volume: 1.0,
            last_error: None,
        }
    }
}

/// Which asset the play/pause button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayPauseIcon {
    #[default]
    Play,
    Pause,
}

impl PlayPauseIcon {
    pub fn asset_name(self) -> &'static str {
        match self {
            PlayPauseIcon::Play => "Play.svg",
            PlayPauseIcon::Pause => "Pause.svg",
        }
    }
}

/// Everything the footer bar renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterDisplay {
    pub icon: PlayPauseIcon,
    pub title: String,
    pub artist: String,
    /// Seek slider value on a 0-100 scale.
    pub progress: f64,
    pub elapsed: String,
    pub duration: String,
}

impl Default for FooterDisplay {
    fn default() -> Self {
        Self {
            icon: PlayPauseIcon::Play,
            title: String::new(),
            artist: String::new(),
            progress: 0.0,
            elapsed: "0:00".to_string(),
            duration: "0:00".to_string(),
        }
    }
}

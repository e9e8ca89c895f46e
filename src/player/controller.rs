use tracing::{debug, info, warn};

use super::{
    filter_rows, AppView, FooterDisplay, MediaEngine, MediaEvent, PageState, PlayPauseIcon,
    PlaybackPhase, PlaybackState, PlaylistView, RowBindings, SearchHit, SearchOutcome,
};
use crate::library::{Library, RowId};
use crate::settings::PlayerSettings;
use crate::utils::{format_time, progress_percent};

/// Owns the audio engine and every piece of player state.
///
/// All mutation goes through the transport operations below or through
/// [`PlayerController::handle_media_event`].
pub struct PlayerController<E: MediaEngine> {
    engine: E,
    library: Library,
    settings: PlayerSettings,
    playlist: PlaylistView,
    bindings: RowBindings,
    playback: PlaybackState,
    pages: PageState,
    footer: FooterDisplay,
    search: SearchOutcome,
}

impl<E: MediaEngine> PlayerController<E> {
    pub fn new(engine: E, library: Library, settings: PlayerSettings) -> Self {
        let search = SearchOutcome::Prompt(settings.search_prompt.clone());
        Self {
            engine,
            library,
            settings,
            playlist: PlaylistView::default(),
            bindings: RowBindings::default(),
            playback: PlaybackState::default(),
            pages: PageState::default(),
            footer: FooterDisplay::default(),
            search,
        }
    }

    /// Initial page load: scan rows, apply volume, optionally start track 0.
    pub fn bootstrap(&mut self) {
        self.refresh_visible_rows();
        self.set_volume(self.settings.initial_volume);
        info!(tracks = self.playlist.len(), "player ready");
        if self.settings.autoplay_on_load && !self.playlist.is_empty() {
            self.select_and_play(0);
        }
    }

    pub fn select_and_play(&mut self, index: usize) {
        let Some(row) = self.playlist.get(index) else {
            debug!(index, "ignoring selection outside the playlist");
            return;
        };
        if !row.has_source() {
            debug!(index, "ignoring row without a source");
            return;
        }

        let src = row.source_url.clone();
        self.footer.title = row.display_title().to_string();
        self.footer.artist = row.artist.clone();

        if self.engine.source() != Some(src.as_str()) {
            debug!(%src, "loading source");
            self.engine.load(&src);
        }
        self.playback.current_index = Some(index);
        self.playlist.set_active(index);
        self.engine.play();
    }

    pub fn toggle_play_pause(&mut self) {
        if self.engine.source().is_none() {
            return;
        }
        if self.engine.is_paused() {
            self.engine.play();
        } else {
            self.engine.pause();
        }
    }

    /// Jump to `fraction` (0..=1) of the current track.
    pub fn seek(&mut self, fraction: f64) {
        let duration = self.engine.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        self.engine.set_current_time(fraction * duration);
    }

    pub fn set_volume(&mut self, level: f64) {
        self.engine.set_volume(level);
        self.playback.volume = level;
    }

    /// Nothing selected counts as sitting just before the first row.
    pub fn next(&mut self) {
        let target = self.playback.current_index.map_or(0, |idx| idx + 1);
        if target < self.playlist.len() {
            self.select_and_play(target);
        }
    }

    pub fn previous(&mut self) {
        if let Some(idx) = self.playback.current_index.filter(|idx| *idx > 0) {
            self.select_and_play(idx - 1);
        }
    }

    /// Re-scan the playlist rows and rebuild the click bindings.
    pub fn refresh_visible_rows(&mut self) {
        let rows = self.library.rows_for(AppView::Playlist).to_vec();
        self.bindings = RowBindings::bind(&rows);
        self.playlist = PlaylistView::new(rows);
        if let Some(idx) = self.playback.current_index {
            self.playlist.set_active(idx);
        }
        debug!(rows = self.bindings.len(), "playlist rows bound");
    }

    /// Click on a rendered row.
    pub fn activate_row(&mut self, row: RowId) {
        match self.bindings.resolve(row) {
            Some(index) => self.select_and_play(index),
            None => debug!(row = row.0, "click on unbound row"),
        }
    }

    pub fn filter_tracks(&mut self, query: &str) -> &SearchOutcome {
        self.refresh_visible_rows();
        self.search = filter_rows(
            self.playlist.rows(),
            query,
            &self.settings.search_prompt,
            &self.settings.no_results_text,
        );
        &self.search
    }

    pub fn choose_search_hit(&mut self, hit: &SearchHit) {
        self.show_view(AppView::Playlist);
        self.select_and_play(hit.index);
    }

    /// Switch pages by menu identifier; unknown identifiers are ignored.
    pub fn show_page(&mut self, page_id: &str) {
        match AppView::from_page_id(page_id) {
            Some(view) => self.show_view(view),
            None => debug!(page_id, "unknown page"),
        }
    }

    pub fn show_view(&mut self, view: AppView) {
        self.pages.show(view);
        if view == AppView::Playlist {
            self.refresh_visible_rows();
        }
    }

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => {
                self.playback.is_playing = true;
                self.playback.last_error = None;
                self.footer.icon = PlayPauseIcon::Pause;
            }
            MediaEvent::Pause | MediaEvent::Ended => {
                self.playback.is_playing = false;
                self.footer.icon = PlayPauseIcon::Play;
            }
            MediaEvent::TimeUpdate {
                current_time,
                duration,
            } => {
                if !duration.is_finite() {
                    return;
                }
                self.playback.current_time_seconds = current_time;
                self.playback.duration_seconds = duration;
                self.footer.progress = progress_percent(current_time, duration);
                self.footer.elapsed = format_time(current_time);
            }
            MediaEvent::LoadedMetadata { duration } => {
                self.playback.duration_seconds = duration;
                self.footer.duration = format_time(duration);
            }
            MediaEvent::Error(err) => {
                warn!(index = ?self.playback.current_index, "media error: {err}");
                self.playback.last_error = Some(err);
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.playback.last_error = None;
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.engine.source().is_none() {
            PlaybackPhase::Idle
        } else if self.engine.is_paused() {
            PlaybackPhase::LoadedPaused
        } else {
            PlaybackPhase::LoadedPlaying
        }
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn footer(&self) -> &FooterDisplay {
        &self.footer
    }

    pub fn playlist(&self) -> &PlaylistView {
        &self.playlist
    }

    pub fn search_outcome(&self) -> &SearchOutcome {
        &self.search
    }

    pub fn active_page(&self) -> AppView {
        self.pages.active()
    }

    pub fn is_page_visible(&self, view: AppView) -> bool {
        self.pages.is_visible(view)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

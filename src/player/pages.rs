//! Defines the page switcher state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Home,
    Playlist,
    Search,
}

impl AppView {
    pub const ALL: [AppView; 3] = [AppView::Home, AppView::Playlist, AppView::Search];

    /// Identifier carried by menu links (`data-page`).
    pub fn page_id(self) -> &'static str {
        match self {
            AppView::Home => "home",
            AppView::Playlist => "playlist",
            AppView::Search => "search",
        }
    }

    pub fn from_page_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.page_id() == id)
    }
}

pub fn view_label(view: AppView) -> &'static str {
    match view {
        AppView::Home => "Home",
        AppView::Playlist => "Playlist",
        AppView::Search => "Search",
    }
}

/// Exactly one page is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    active: AppView,
}

impl PageState {
    pub fn active(&self) -> AppView {
        self.active
    }

    pub fn is_visible(&self, view: AppView) -> bool {
        self.active == view
    }

    pub fn show(&mut self, view: AppView) {
        self.active = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip() {
        for view in AppView::ALL {
            assert_eq!(AppView::from_page_id(view.page_id()), Some(view));
        }
        assert_eq!(AppView::from_page_id("settings"), None);
        assert_eq!(AppView::from_page_id("Playlist"), None);
    }

    #[test]
    fn only_the_shown_page_is_visible() {
        let mut pages = PageState::default();
        pages.show(AppView::Search);
        let visible: Vec<_> = AppView::ALL
            .into_iter()
            .filter(|view| pages.is_visible(*view))
            .collect();
        assert_eq!(visible, vec![AppView::Search]);
    }
}

//! Application state definitions

use super::drawer_state::NavDrawer;
use super::forms::ModalFocus;
use crate::i18n::{Locale, Translation};

/// Everything the page renders apart from the registration workflow
#[derive(Debug, Default)]
pub struct AppState {
    /// Active interface locale
    pub locale: Locale,
    /// Labels for the active locale
    pub translation: Translation,
    /// Navigation drawer
    pub drawer: NavDrawer,
    /// First visible row of the page body
    pub page_scroll: u16,
    /// Focused control inside the registration modal
    pub modal_focus: ModalFocus,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(locale: Locale, translation: Translation) -> Self {
        Self {
            locale,
            translation,
            ..Default::default()
        }
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.page_scroll = self.page_scroll.saturating_sub(rows);
    }

    /// Scroll down, never past `max_scroll`
    pub fn scroll_down(&mut self, rows: u16, max_scroll: u16) {
        self.page_scroll = self.page_scroll.saturating_add(rows).min(max_scroll);
    }

    pub fn nav_len(&self) -> usize {
        self.translation.header.nav.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.locale, Locale::Es);
        assert_eq!(state.page_scroll, 0);
        assert_eq!(state.modal_focus, ModalFocus::default());
        assert!(state.status_message.is_none());
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut state = AppState::default();
        state.scroll_up(3);
        assert_eq!(state.page_scroll, 0);

        state.scroll_down(5, 8);
        assert_eq!(state.page_scroll, 5);
        state.scroll_down(5, 8);
        assert_eq!(state.page_scroll, 8);
        state.scroll_up(2);
        assert_eq!(state.page_scroll, 6);
    }
}

//! Application state and core logic

use crate::config::AppConfig;
use crate::i18n::{load_translation, LocaleSource};
use crate::state::{
    push_age_digit, AppState, FieldId, FieldKind, ModalFocus, RegistrationWorkflow,
    WorkflowEvent,
};
use crate::submission::Submitter;
use crate::ui::{
    self, landing, nav_drawer,
    registration_modal::{ModalHit, ModalLayout},
    HeaderLayout,
};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Rows moved by PageUp/PageDown
const PAGE_STEP: u16 = 10;

/// Messages sent by callbacks wired into the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    RegistrationClosed,
}

/// Main application struct
pub struct App {
    /// Page state
    pub state: AppState,
    /// Registration modal controller
    pub registration: RegistrationWorkflow,
    locale_source: LocaleSource,
    workflow_events: UnboundedReceiver<WorkflowEvent>,
    notices: UnboundedReceiver<Notice>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    ///
    /// Fails when the locale data cannot be loaded.
    pub fn new(config: &AppConfig, submitter: Arc<dyn Submitter>) -> Result<Self> {
        let locale = config.locale();
        let locale_source = config.locale_source();
        let translation = load_translation(locale, &locale_source)?;
        tracing::info!(%locale, "starting");

        let (event_tx, workflow_events) = mpsc::unbounded_channel();
        let (notice_tx, notices) = mpsc::unbounded_channel();
        let registration = RegistrationWorkflow::new(submitter, event_tx)
            .with_dismiss_delay(config.dismiss_delay())
            .on_close(move || {
                let _ = notice_tx.send(Notice::RegistrationClosed);
            });

        Ok(Self {
            state: AppState::new(locale, translation),
            registration,
            locale_source,
            workflow_events,
            notices,
            quit: false,
            terminal_size: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the screen is changing without input (faster redraw needed)
    pub fn is_animating(&self) -> bool {
        self.state.drawer.is_animating() || self.registration.is_pending()
    }

    /// Apply results delivered by background tasks
    pub fn poll_background(&mut self) {
        while let Ok(event) = self.workflow_events.try_recv() {
            self.registration.handle_event(event);
        }
        while let Ok(notice) = self.notices.try_recv() {
            match notice {
                Notice::RegistrationClosed => {
                    self.state.modal_focus = ModalFocus::default();
                }
            }
        }
    }

    fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    fn page_area(&self) -> Rect {
        let (_, page, _) = ui::create_layout(self.screen());
        page
    }

    fn max_scroll(&self) -> u16 {
        let page = self.page_area();
        let content = landing::content_height(&self.state.translation.sections, page.width);
        // page block has a border above and below
        content.saturating_sub(page.height.saturating_sub(2))
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.registration.is_open() {
            self.handle_modal_key(key);
        } else if self.state.drawer.is_open() {
            self.handle_drawer_key(key);
        } else {
            self.handle_page_key(key)?;
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.state.drawer.open(),
            KeyCode::Char('r') | KeyCode::Enter => self.open_registration(),
            KeyCode::Char('l') => self.switch_locale()?,
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.max_scroll();
                self.state.scroll_down(1, max);
            }
            KeyCode::PageUp => self.state.scroll_up(PAGE_STEP),
            KeyCode::PageDown => {
                let max = self.max_scroll();
                self.state.scroll_down(PAGE_STEP, max);
            }
            KeyCode::Home => self.state.page_scroll = 0,
            _ => {}
        }
        Ok(())
    }

    fn handle_drawer_key(&mut self, key: KeyEvent) {
        let count = self.state.nav_len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.state.drawer.close(),
            KeyCode::Up | KeyCode::Char('k') => self.state.drawer.select_prev(count),
            KeyCode::Down | KeyCode::Char('j') => self.state.drawer.select_next(count),
            KeyCode::Enter => {
                self.go_to_section(self.state.drawer.selected);
                self.state.drawer.close();
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let focus = self.state.modal_focus;
        match key.code {
            KeyCode::Esc => self.registration.close(),
            KeyCode::Tab => self.state.modal_focus = focus.next(),
            KeyCode::BackTab => self.state.modal_focus = focus.prev(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_registration()
            }
            KeyCode::Enter => match focus {
                ModalFocus::Close => self.registration.close(),
                _ => self.submit_registration(),
            },
            KeyCode::Char(' ') if focus == ModalFocus::Field(FieldId::Terms) => {
                self.toggle_terms()
            }
            KeyCode::Char(' ') if focus == ModalFocus::Submit => self.submit_registration(),
            KeyCode::Char(' ') if focus == ModalFocus::Close => self.registration.close(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(id) = focus.field() {
                    self.input_char(id, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(id) = focus.field().filter(|id| id.kind() != FieldKind::Checkbox) {
                    let mut value = self.registration.form().text(id).to_string();
                    value.pop();
                    self.registration.update_field(id, value);
                }
            }
            _ => {}
        }
    }

    fn input_char(&mut self, id: FieldId, c: char) {
        let mut value = self.registration.form().text(id).to_string();
        let accepted = match id.kind() {
            FieldKind::Checkbox => false,
            FieldKind::Numeric => push_age_digit(&mut value, c),
            FieldKind::Text => {
                value.push(c);
                true
            }
        };
        if accepted {
            self.registration.update_field(id, value);
        }
    }

    fn toggle_terms(&mut self) {
        let checked = !self.registration.form().terms;
        self.registration.update_field(FieldId::Terms, checked);
    }

    fn open_registration(&mut self) {
        self.state.modal_focus = ModalFocus::default();
        self.registration.open();
    }

    fn submit_registration(&mut self) {
        let outcome = self.registration.submit();
        tracing::debug!(?outcome, "submit requested");
    }

    /// Scroll the page so the section behind nav entry `index` is on top
    fn go_to_section(&mut self, index: usize) {
        let Some(entry) = self.state.translation.header.nav.get(index) else {
            return;
        };
        let width = self.page_area().width;
        match landing::section_offset(&self.state.translation.sections, &entry.id, width) {
            Some(offset) => self.state.page_scroll = offset.min(self.max_scroll()),
            None => tracing::warn!(id = %entry.id, "nav entry has no matching section"),
        }
    }

    /// Load the next locale's labels
    ///
    /// A missing locale file is a configuration error and ends the app.
    fn switch_locale(&mut self) -> Result<()> {
        let next = self.state.locale.next();
        let translation = load_translation(next, &self.locale_source)?;
        tracing::info!(locale = %next, "switched locale");

        self.state.locale = next;
        self.state.translation = translation;
        self.state.page_scroll = self.state.page_scroll.min(self.max_scroll());
        self.state.status_message = Some(next.as_str().to_uppercase());
        Ok(())
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let overlay = self.registration.is_open() || self.state.drawer.is_open();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp if !overlay => self.state.scroll_up(1),
            MouseEventKind::ScrollDown if !overlay => {
                let max = self.max_scroll();
                self.state.scroll_down(1, max);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let screen = self.screen();

        if self.registration.is_open() {
            match ModalLayout::new(screen).hit(column, row) {
                ModalHit::Backdrop | ModalHit::Close => self.registration.close(),
                ModalHit::Submit => {
                    self.state.modal_focus = ModalFocus::Submit;
                    self.submit_registration();
                }
                ModalHit::Field(id) => {
                    self.state.modal_focus = ModalFocus::Field(id);
                    if id == FieldId::Terms {
                        self.toggle_terms();
                    }
                }
                ModalHit::Dialog => {}
            }
            return;
        }

        // Any click on the open drawer closes it
        if self.state.drawer.is_open() {
            if let Some(index) = nav_drawer::entry_at(screen, self.state.nav_len(), row) {
                self.go_to_section(index);
            }
            self.state.drawer.close();
            return;
        }

        let (header_area, _, _) = ui::create_layout(screen);
        let header = HeaderLayout::new(header_area, self.state.translation.registration.register());
        if header.hits_menu(column, row) {
            self.state.drawer.open();
        } else if header.hits_register(column, row) {
            self.open_registration();
        }
    }
}

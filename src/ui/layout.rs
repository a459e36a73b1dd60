//! Layout components (header, status bar)

use super::components::{button_width, render_button, BUTTON_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the drawer toggle
const MENU_LABEL: &str = "☰";

/// Split the screen into header, page body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header
            Constraint::Min(0),                // Page
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Clickable regions of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub title: Rect,
    pub register: Rect,
    pub menu: Rect,
}

impl HeaderLayout {
    pub fn new(area: Rect, register_label: &str) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(button_width(register_label)),
                Constraint::Length(button_width(MENU_LABEL)),
            ])
            .split(area);

        Self {
            title: chunks[0],
            register: chunks[1],
            menu: chunks[2],
        }
    }

    pub fn hits_register(&self, column: u16, row: u16) -> bool {
        self.register.contains(Position::new(column, row))
    }

    pub fn hits_menu(&self, column: u16, row: u16) -> bool {
        self.menu.contains(Position::new(column, row))
    }
}

/// Draw the header: page title, register button, menu toggle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let translation = &app.state.translation;
    let register_label = translation.registration.register();
    let layout = HeaderLayout::new(area, register_label);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", translation.header.title),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, layout.title);

    render_button(
        frame,
        layout.register,
        register_label,
        false,
        true,
        Some(Color::Blue),
    );
    render_button(
        frame,
        layout.menu,
        MENU_LABEL,
        app.state.drawer.is_open(),
        true,
        None,
    );
}

/// Key hints for whatever currently has input focus
fn get_hints(app: &App) -> &'static str {
    if app.registration.is_open() {
        " Tab:next  Space:toggle  Enter:submit  Esc:close "
    } else if app.state.drawer.is_open() {
        " ↑↓:select  Enter:go  Esc:close "
    } else {
        " r:register  m:menu  l:language  ↑↓:scroll  q:quit "
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.state.locale.as_str().to_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Span::styled(get_hints(app), Style::default().fg(Color::Gray)),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

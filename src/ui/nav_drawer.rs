//! Full-screen navigation drawer

use crate::app::App;
use crate::i18n::NavEntry;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

/// Rows between consecutive entries (entry + gap)
const ENTRY_STRIDE: u16 = 2;

/// Part of `area` covered by a drawer that has slid in by `coverage`
pub fn drawer_area(area: Rect, coverage: f32) -> Rect {
    let coverage = coverage.clamp(0.0, 1.0);
    let width = (area.width as f32 * coverage).round() as u16;
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Row of the first entry; entries are centered vertically
fn first_entry_row(area: Rect, entry_count: usize) -> u16 {
    let block_height = (entry_count as u16 * ENTRY_STRIDE).saturating_sub(1);
    area.y + area.height.saturating_sub(block_height) / 2
}

/// Entry on screen `row` of a fully open drawer
pub fn entry_at(area: Rect, entry_count: usize, row: u16) -> Option<usize> {
    let first = first_entry_row(area, entry_count);
    if row < first {
        return None;
    }
    let offset = row - first;
    if offset % ENTRY_STRIDE != 0 {
        return None;
    }
    let index = (offset / ENTRY_STRIDE) as usize;
    (index < entry_count).then_some(index)
}

/// Draw the drawer at its current animation position
pub fn draw(frame: &mut Frame, app: &App) {
    let drawer = &app.state.drawer;
    let area = drawer_area(frame.area(), drawer.coverage());
    if area.width == 0 {
        return;
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::White).fg(Color::Black)),
        area,
    );

    let entries: &[NavEntry] = &app.state.translation.header.nav;
    let first = first_entry_row(area, entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let y = first + i as u16 * ENTRY_STRIDE;
        if y >= area.y + area.height {
            break;
        }
        let is_selected = i == drawer.selected;
        let style = if is_selected {
            Style::default()
                .fg(Color::Green)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Black).bg(Color::White)
        };
        let row = Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(entry.label.as_str(), style)))
                .alignment(Alignment::Center),
            row,
        );
    }
}

//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Visual state of a text input
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldStyle {
    pub is_active: bool,
    /// Value is accepted but outside the suggested range
    pub is_warning: bool,
    pub is_required: bool,
}

/// Draw a bordered single-line text input
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    style: FieldStyle,
) {
    let border_style = if style.is_warning {
        Style::default().fg(Color::Yellow)
    } else if style.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if style.is_active { "▌" } else { "" };

    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, Style::default().fg(Color::White))
    };

    // Cursor sits before the placeholder, after typed text
    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value_span,
        ])
    } else {
        Line::from(vec![
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let title = if style.is_required {
        format!(" {label} * ")
    } else {
        format!(" {label} ")
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a one-line checkbox with its label
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(label, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| {
                draw_text_field(
                    frame,
                    frame.area(),
                    "Edad",
                    "",
                    "18...",
                    FieldStyle::default(),
                )
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(row(buffer, 0).contains("Edad"));
        assert!(row(buffer, 1).contains("18..."));
    }

    #[test]
    fn test_required_marker() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| {
                let style = FieldStyle {
                    is_required: true,
                    ..Default::default()
                };
                draw_text_field(frame, frame.area(), "Email", "a@b.com", "", style)
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(row(buffer, 0).contains("Email *"));
        assert!(row(buffer, 1).contains("a@b.com"));
    }

    #[test]
    fn test_checkbox_mark() {
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal
            .draw(|frame| draw_checkbox(frame, frame.area(), "Terms", true, false))
            .unwrap();
        assert!(row(terminal.backend().buffer(), 0).contains("[x] Terms"));
    }
}

//! Landing page content

use super::components::wrap_text;
use crate::app::App;
use crate::i18n::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Horizontal padding inside the page block
const PAGE_PADDING: u16 = 2;

/// A rendered row of the page, before styling
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageLine {
    Heading(String),
    Body(String),
    Blank,
}

/// Width available for text inside a page area of `width` columns
fn text_width(width: u16) -> usize {
    // borders + padding on both sides
    width.saturating_sub(2 + PAGE_PADDING * 2).max(1) as usize
}

fn page_lines(sections: &[Section], width: usize) -> Vec<PageLine> {
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(PageLine::Blank);
        }
        lines.push(PageLine::Heading(section.title.clone()));
        lines.push(PageLine::Blank);
        for line in wrap_text(&section.body, width) {
            lines.push(PageLine::Body(line));
        }
    }
    lines
}

/// Row at which the section with `id` starts, for a page area of `width` columns
pub fn section_offset(sections: &[Section], id: &str, width: u16) -> Option<u16> {
    let width = text_width(width);
    let mut row = 0u16;
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            row += 1;
        }
        if section.id == id {
            return Some(row);
        }
        // heading, blank, body
        row += 2 + wrap_text(&section.body, width).len() as u16;
    }
    None
}

/// Total number of rows the page occupies
pub fn content_height(sections: &[Section], width: u16) -> u16 {
    page_lines(sections, text_width(width)).len() as u16
}

/// Draw the scrollable page body
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let sections = &app.state.translation.sections;
    let width = text_width(area.width);
    let pad = " ".repeat(PAGE_PADDING as usize);

    let lines: Vec<Line> = page_lines(sections, width)
        .into_iter()
        .map(|line| match line {
            PageLine::Heading(text) => Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            PageLine::Body(text) => Line::from(vec![Span::raw(pad.clone()), Span::raw(text)]),
            PageLine::Blank => Line::from(""),
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((app.state.page_scroll, 0));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, body: &str) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_uppercase(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_first_section_starts_at_top() {
        let sections = vec![section("about", "short"), section("faq", "short")];
        assert_eq!(section_offset(&sections, "about", 80), Some(0));
    }

    #[test]
    fn test_offsets_account_for_wrapping() {
        let sections = vec![
            section("about", "one two three four five six"),
            section("faq", "x"),
        ];
        // text width is 20 - 6 = 14: "one two three" / "four five six"
        // about: heading, blank, 2 body rows; then a separator blank
        assert_eq!(section_offset(&sections, "faq", 20), Some(5));
        assert_eq!(content_height(&sections, 20), 8);
    }

    #[test]
    fn test_offset_matches_heading_row() {
        let sections = vec![
            section("about", "a b c"),
            section("format", "d e f g h i j k l m n o p"),
            section("prizes", "q"),
        ];
        let lines = page_lines(&sections, text_width(24));
        for s in &sections {
            let row = section_offset(&sections, &s.id, 24).unwrap() as usize;
            assert_eq!(lines[row], PageLine::Heading(s.title.clone()));
        }
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(section_offset(&[section("about", "")], "nope", 80), None);
    }
}

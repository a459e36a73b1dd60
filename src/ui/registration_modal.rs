//! Registration modal rendering and hit testing

use super::components::{centered_rect, render_button, wrap_text, BUTTON_HEIGHT};
use super::forms::{draw_checkbox, draw_text_field, FieldStyle};
use crate::app::App;
use crate::state::{age_out_of_range, FieldId, ModalFocus, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 56;
/// Borders (2) + five text inputs (15) + checkbox (1) + gap (1) + button + message (2)
const DIALOG_HEIGHT: u16 = 2 + 15 + 1 + 1 + BUTTON_HEIGHT + 2;
const FIELD_HEIGHT: u16 = 3;
const CLOSE_LABEL: &str = "[x]";

/// Screen regions of the modal, shared by drawing and mouse handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    pub dialog: Rect,
    pub close: Rect,
    pub fields: [Rect; 6],
    pub submit: Rect,
    pub message: Rect,
}

/// What a click inside the terminal landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    Close,
    Field(FieldId),
    Submit,
    /// Inside the dialog but not on a control
    Dialog,
    Backdrop,
}

impl ModalLayout {
    pub fn new(area: Rect) -> Self {
        let dialog = centered_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);

        let close = Rect {
            x: (dialog.x + dialog.width).saturating_sub(CLOSE_LABEL.len() as u16 + 2),
            y: dialog.y,
            width: CLOSE_LABEL.len() as u16,
            height: 1,
        };

        let inner = Block::default().borders(Borders::ALL).inner(dialog);
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT), // Full name
                Constraint::Length(FIELD_HEIGHT), // Email
                Constraint::Length(FIELD_HEIGHT), // Phone
                Constraint::Length(FIELD_HEIGHT), // Age
                Constraint::Length(FIELD_HEIGHT), // Nickname
                Constraint::Length(1),            // Terms
                Constraint::Length(1),            // Gap
                Constraint::Length(BUTTON_HEIGHT), // Submit
                Constraint::Min(0),               // Status message
            ])
            .split(inner);

        Self {
            dialog,
            close,
            fields: [
                chunks[0], chunks[1], chunks[2], chunks[3], chunks[4], chunks[5],
            ],
            submit: chunks[7],
            message: chunks[8],
        }
    }

    pub fn field(&self, id: FieldId) -> Rect {
        self.fields[id.index()]
    }

    /// Classify a click at terminal cell (`column`, `row`)
    pub fn hit(&self, column: u16, row: u16) -> ModalHit {
        let pos = Position::new(column, row);
        if !self.dialog.contains(pos) {
            return ModalHit::Backdrop;
        }
        if self.close.contains(pos) {
            return ModalHit::Close;
        }
        if self.submit.contains(pos) {
            return ModalHit::Submit;
        }
        FieldId::ALL
            .into_iter()
            .find(|id| self.field(*id).contains(pos))
            .map(ModalHit::Field)
            .unwrap_or(ModalHit::Dialog)
    }
}

/// Draw the modal over a dimmed page
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = ModalLayout::new(area);
    let labels = &app.state.translation.registration;
    let workflow = &app.registration;
    let form = workflow.form();
    let focus = app.state.modal_focus;

    // Backdrop
    let backdrop = Block::default().style(Style::default().bg(Color::Black).fg(Color::DarkGray));
    frame.render_widget(backdrop, area);

    frame.render_widget(Clear, layout.dialog);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", labels.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, layout.dialog);

    let close_style = if focus == ModalFocus::Close {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, close_style)),
        layout.close,
    );

    for id in FieldId::ALL {
        let is_active = focus == ModalFocus::Field(id);
        match id {
            FieldId::Terms => {
                draw_checkbox(frame, layout.field(id), labels.field(id), form.terms, is_active)
            }
            _ => {
                let value = form.text(id);
                let style = FieldStyle {
                    is_active,
                    is_warning: id == FieldId::Age && age_out_of_range(value),
                    is_required: id.is_required(),
                };
                draw_text_field(
                    frame,
                    layout.field(id),
                    labels.field(id),
                    value,
                    id.placeholder(),
                    style,
                );
            }
        }
    }

    let submit_text = if workflow.is_pending() {
        format!("{} …", labels.submit())
    } else {
        labels.submit().to_string()
    };
    render_button(
        frame,
        layout.submit,
        &submit_text,
        focus == ModalFocus::Submit,
        workflow.can_submit(),
        Some(Color::Blue),
    );

    let message = match workflow.status() {
        SubmissionStatus::Unset => None,
        SubmissionStatus::Success => Some((labels.success(), Color::Green)),
        SubmissionStatus::Error => Some((labels.error(), Color::Red)),
    };
    if let Some((text, color)) = message {
        let lines: Vec<Line> = wrap_text(text, layout.message.width as usize)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(color))))
            .collect();
        frame.render_widget(Paragraph::new(lines), layout.message);
    }
}

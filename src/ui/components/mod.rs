//! Reusable UI components

mod button;
mod text;

pub use button::{button_width, render_button, BUTTON_HEIGHT};
pub use text::wrap_text;

use ratatui::layout::Rect;

/// Center a `width` x `height` rectangle inside `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

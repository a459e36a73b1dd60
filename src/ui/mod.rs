//! UI module for rendering the TUI

mod components;
mod forms;
pub mod landing;
mod layout;
pub mod nav_drawer;
pub mod registration_modal;

pub use layout::{create_layout, HeaderLayout};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, page_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);
    landing::draw(frame, page_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays
    if app.state.drawer.is_visible() {
        nav_drawer::draw(frame, app);
    }
    if app.registration.is_open() {
        registration_modal::draw(frame, app);
    }
}

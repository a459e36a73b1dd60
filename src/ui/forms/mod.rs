//! Form rendering module

mod field_renderer;

pub use field_renderer::{draw_checkbox, draw_text_field, FieldStyle};

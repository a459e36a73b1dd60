//! Application state module

mod app_state;
mod drawer_state;
mod forms;
mod registration;

pub use app_state::*;
pub use drawer_state::*;
pub use forms::*;
pub use registration::*;

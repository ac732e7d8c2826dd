pub mod log_panel;
pub mod viewer;

pub use log_panel::show_status_bar;
pub use viewer::{show_page, show_toolbar};

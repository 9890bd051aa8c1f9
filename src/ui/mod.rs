pub mod dialogs;
pub mod formatting;
pub mod updates;

pub use dialogs::{hide_error, set_status, show_error};
pub use formatting::{format_filter_count, format_load_status};
pub use updates::{refresh_panel, update_ui_from_state};

use slint::ComponentHandle;

use crate::ui::hide_error;
use crate::MainWindow;

/// Register all dialog response handlers
pub fn register_dialog_handlers(window: &MainWindow) {
    register_error_dialog_close(window);
}

/// Register error dialog close handler
fn register_error_dialog_close(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_error_dialog_close(move || {
        if let Some(main_window) = main_window_weak.upgrade() {
            hide_error(&main_window);
        }
    });
}

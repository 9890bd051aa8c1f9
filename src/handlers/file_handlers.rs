use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::error;

use crate::operations::FileOperations;
use crate::state::{AppState, SearchState};
use crate::MainWindow;

/// Register all file operation handlers
pub fn register_file_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    register_file_open(window, app_state, search_state);
    register_file_reload(window, app_state, search_state);
    register_file_exit(window);
}

/// Register File -> Open handler
fn register_file_open(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let search_state = search_state.clone();

    window.on_file_open(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };
        let app_state = app_state.clone();
        let search_state = search_state.clone();

        let spawned = slint::spawn_local(async move {
            let ops = FileOperations::new(&app_state, &search_state, &main_window);
            ops.open_file_dialog_and_load().await;
        });
        if let Err(e) = spawned {
            error!("failed to open file dialog: {}", e);
        }
    });
}

/// Register File -> Reload handler
fn register_file_reload(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let search_state = search_state.clone();

    window.on_file_reload(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        FileOperations::new(&app_state, &search_state, &main_window).reload();
    });
}

/// Register File -> Exit handler
fn register_file_exit(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_file_exit(move || {
        if let Some(main_window) = main_window_weak.upgrade() {
            let _ = main_window.hide();
        }
        let _ = slint::quit_event_loop();
    });
}

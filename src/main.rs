mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use handlers::{
    register_dialog_handlers, register_file_handlers, register_filter_handlers,
    register_ui_handlers, search_listener,
};
use operations::FileOperations;
use state::{AppState, SearchState};
use ui::{set_status, update_ui_from_state};

slint::include_modules!();

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Refiner Studio");

    let main_window = MainWindow::new()?;

    // The window is the parent of the filter panel: it owns the search state
    // and receives every selection change through the listener
    let search_state = Rc::new(RefCell::new(SearchState::new()));
    let listener = search_listener(&main_window, &search_state);
    let app_state = Rc::new(RefCell::new(AppState::new(listener)));

    register_file_handlers(&main_window, &app_state, &search_state);
    register_filter_handlers(&main_window, &app_state, &search_state);
    register_dialog_handlers(&main_window);
    register_ui_handlers(&main_window);

    update_ui_from_state(&main_window, &app_state.borrow(), &search_state.borrow());
    set_status(&main_window, "Open a refiner file to begin", StatusLevel::Info);

    // Optional refiner file given on the command line
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        FileOperations::new(&app_state, &search_state, &main_window).load_file(&path);
    }

    main_window.run()?;
    Ok(())
}

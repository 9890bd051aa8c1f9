use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::error;

use crate::errors::{map_file_load_error, map_reload_error};
use crate::state::{AppState, SearchState};
use crate::ui::{format_load_status, set_status, show_error, update_ui_from_state};
use crate::{MainWindow, StatusLevel};

/// File operations orchestration
/// Handles refiner file I/O with proper error handling and UI updates
pub struct FileOperations<'a> {
    app_state: &'a Rc<RefCell<AppState>>,
    search_state: &'a Rc<RefCell<SearchState>>,
    window: &'a MainWindow,
}

impl<'a> FileOperations<'a> {
    pub fn new(
        app_state: &'a Rc<RefCell<AppState>>,
        search_state: &'a Rc<RefCell<SearchState>>,
        window: &'a MainWindow,
    ) -> Self {
        Self {
            app_state,
            search_state,
            window,
        }
    }

    /// Open file dialog and load the selected refiner file
    pub async fn open_file_dialog_and_load(&self) {
        if let Some(file) = rfd::AsyncFileDialog::new()
            .add_filter("JSON", &["json"])
            .set_title("Open Refiner File")
            .pick_file()
            .await
        {
            self.load_file(file.path());
        }
    }

    /// Load a refiner file from the given path
    /// A different file starts a new query, so selections from the old file are dropped
    pub fn load_file(&self, path: &Path) {
        let is_new_file = self.app_state.borrow().is_new_file(path);

        // Load the file (borrow mutably, then drop the borrow)
        let load_result = self
            .app_state
            .borrow_mut()
            .load_from_file(path.to_path_buf());

        match load_result {
            Ok(warnings) => {
                if is_new_file {
                    self.search_state.borrow_mut().begin_query();
                }
                self.show_loaded(warnings.len());
            }
            Err(e) => {
                error!(path = %path.display(), "{}", e);
                let (title, message, details) = map_file_load_error(&e, path);
                show_error(self.window, title, message, details);
            }
        }
    }

    /// Reload the current refiner file from disk
    pub fn reload(&self) {
        let reload_result = self.app_state.borrow_mut().reload();

        match reload_result {
            None => set_status(self.window, "No file to reload", StatusLevel::Warning),
            Some(Ok(warnings)) => self.show_loaded(warnings.len()),
            Some(Err(e)) => {
                let path = self.app_state.borrow().current_file.clone().unwrap_or_default();
                error!(path = %path.display(), "{}", e);
                let (title, message, details) = map_reload_error(&e, &path);
                show_error(self.window, title, message, details);
            }
        }
    }

    /// Pass the loaded document to the panel and redraw
    fn show_loaded(&self, warnings: usize) {
        let reset = self.search_state.borrow_mut().take_reset();
        if reset {
            self.app_state.borrow_mut().reset_panel();
        } else {
            self.app_state.borrow_mut().push_props(false);
        }

        let app_state = self.app_state.borrow();
        update_ui_from_state(self.window, &app_state, &self.search_state.borrow());

        let facets = app_state.panel.props().available_filters.len();
        let level = if warnings == 0 {
            StatusLevel::Success
        } else {
            StatusLevel::Warning
        };
        set_status(self.window, format_load_status(facets, warnings), level);
    }
}

use refiners_core::RefinementFilter;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::state::{AppState, SearchState};
use crate::ui::{format_filter_count, refresh_panel, set_status};
use crate::{MainWindow, StatusLevel};

/// Build the listener the panel calls on every selection change
/// It records the selection on the search side; redrawing is left to the handler that caused it
pub fn search_listener(
    window: &MainWindow,
    search_state: &Rc<RefCell<SearchState>>,
) -> impl FnMut(&[RefinementFilter]) + 'static {
    let main_window_weak = window.as_weak();
    let search_state = search_state.clone();

    move |selected: &[RefinementFilter]| {
        search_state.borrow_mut().record_filters(selected);

        if let Some(main_window) = main_window_weak.upgrade() {
            set_status(&main_window, format_filter_count(selected.len()), StatusLevel::Info);
        }
    }
}

/// Register all filter panel handlers
pub fn register_filter_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    register_toggle_group(window, app_state, search_state);
    register_toggle_value(window, app_state, search_state);
    register_remove_all(window, app_state, search_state);
    register_new_query(window, app_state, search_state);
}

/// Register group header click handler
fn register_toggle_group(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let search_state = search_state.clone();

    window.on_toggle_group(move |group| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        let collapsed = usize::try_from(group)
            .ok()
            .and_then(|group| app_state.borrow_mut().panel.toggle_group(group));
        match collapsed {
            Some(collapsed) => debug!(group, collapsed, "group toggled"),
            None => warn!(group, "header click for unknown group"),
        }

        refresh_panel(&main_window, &app_state.borrow(), &search_state.borrow());
    });
}

/// Register checkbox change handler
fn register_toggle_value(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let search_state = search_state.clone();

    window.on_toggle_value(move |group, value, checked| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        // The listener borrows the search state, so only the app state is held here
        let toggled = match (usize::try_from(group), usize::try_from(value)) {
            (Ok(group), Ok(value)) => app_state.borrow_mut().panel.toggle_value(group, value, checked),
            _ => false,
        };
        if !toggled {
            warn!(group, value, "checkbox change for unknown value");
        }

        refresh_panel(&main_window, &app_state.borrow(), &search_state.borrow());
    });
}

/// Register "remove all filters" handler
fn register_remove_all(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let search_state = search_state.clone();

    window.on_remove_all(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        app_state.borrow_mut().panel.remove_all();
        refresh_panel(&main_window, &app_state.borrow(), &search_state.borrow());
    });
}

/// Register Search -> New Query handler
/// The parent raises the reset flag for one props update, then lowers it
fn register_new_query(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    search_state: &Rc<RefCell<SearchState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let search_state = search_state.clone();

    window.on_new_query(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        {
            let mut search = search_state.borrow_mut();
            search.begin_query();
            search.take_reset();
        }
        app_state.borrow_mut().reset_panel();

        refresh_panel(&main_window, &app_state.borrow(), &search_state.borrow());

        let query = search_state.borrow().query_count;
        set_status(&main_window, format!("Query {} started", query), StatusLevel::Info);
    });
}

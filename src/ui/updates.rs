use refiners_core::format_active_filters;
use slint::{SharedString, VecModel};
use std::rc::Rc;

use crate::state::{AppState, SearchState};
use crate::ui::formatting::create_group_rows;
use crate::MainWindow;

/// Update the UI from the current application state
pub fn update_ui_from_state(main_window: &MainWindow, app_state: &AppState, search_state: &SearchState) {
    main_window.set_window_title(SharedString::from(app_state.get_window_title()));

    refresh_panel(main_window, app_state, search_state);
}

/// Redraw the filter panel and the active filter summary
pub fn refresh_panel(main_window: &MainWindow, app_state: &AppState, search_state: &SearchState) {
    let view = app_state.panel.view();

    let group_model = Rc::new(VecModel::from(create_group_rows(&view)));
    main_window.set_groups(group_model.into());
    main_window.set_show_remove_all(view.show_remove_all);
    main_window.set_placeholder_text(SharedString::from(
        view.placeholder.as_deref().unwrap_or_default(),
    ));

    let active = format_active_filters(&search_state.applied_filters, app_state.configuration());
    main_window.set_active_filters_text(SharedString::from(active));
}

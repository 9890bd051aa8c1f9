use std::path::{Path, PathBuf};

use refiners_core::*;
use tracing::warn;

/// Text shown in the panel when the loaded document has no refiners
pub const NO_REFINERS_PLACEHOLDER: &str = "No refiners available";

/// Application state management - Refiner data and the panel showing it
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded refiner document
    pub document: Option<RefinerDocument>,
    /// Path to current refiner file
    pub current_file: Option<PathBuf>,
    /// The filter panel hosted by the window
    pub panel: FilterPanel,
}

impl AppState {
    /// Mount an empty panel that reports selection changes to `listener`
    pub fn new(listener: impl FilterListener + 'static) -> Self {
        Self {
            document: None,
            current_file: None,
            panel: FilterPanel::mount(PanelProps::default(), listener)
                .with_placeholder(NO_REFINERS_PLACEHOLDER),
        }
    }

    /// Load a refiner file
    /// Inconsistencies are logged and returned; they do not prevent loading
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<Vec<String>, RefinerError> {
        let document = load_refiners(&path)?;

        let warnings = validate_refiners(&document).err().unwrap_or_default();
        for warning in &warnings {
            warn!(path = %path.display(), "{}", warning);
        }

        self.document = Some(document);
        self.current_file = Some(path);

        Ok(warnings)
    }

    /// Reload the current file from disk
    pub fn reload(&mut self) -> Option<Result<Vec<String>, RefinerError>> {
        let path = self.current_file.clone()?;
        Some(self.load_from_file(path))
    }

    /// Hand the loaded document to the panel as fresh props
    pub fn push_props(&mut self, reset_selected_filters: bool) {
        let mut props = self
            .document
            .clone()
            .map(PanelProps::from)
            .unwrap_or_default();
        props.reset_selected_filters = reset_selected_filters;

        self.panel.set_props(props);
    }

    /// Signal a new query to the panel
    /// The flag is raised for one props update and lowered right after, so every call clears the selection
    pub fn reset_panel(&mut self) {
        self.push_props(true);
        self.push_props(false);
    }

    /// Whether `path` is a different file from the one currently loaded
    pub fn is_new_file(&self, path: &Path) -> bool {
        self.current_file.as_deref() != Some(path)
    }

    /// Refiner configuration of the loaded document
    pub fn configuration(&self) -> &[RefinerConfiguration] {
        self.document
            .as_ref()
            .map(|d| d.refiners_configuration.as_slice())
            .unwrap_or_default()
    }

    /// Get window title with file name
    pub fn get_window_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("No file loaded");

        format!("Refiner Studio - {}", file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn write_refiners(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("refiners.json");
        let contents = json!({
            "availableFilters": [
                {"FilterName": "Color", "Values": [
                    {"RefinementValue": "Red", "RefinementCount": 3, "RefinementToken": "red"},
                    {"RefinementValue": "Red", "RefinementCount": 1, "RefinementToken": "red"}
                ]}
            ]
        });
        std::fs::write(&path, contents.to_string()).unwrap();
        path
    }

    #[test]
    fn test_load_reports_warnings_and_keeps_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_refiners(dir.path());
        let mut state = AppState::new(|_: &[RefinementFilter]| {});

        let warnings = state.load_from_file(path).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(state.document.is_some());
        assert_eq!(state.get_window_title(), "Refiner Studio - refiners.json");
    }

    #[test]
    fn test_push_props_with_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_refiners(dir.path());
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut state = AppState::new(move |_: &[RefinementFilter]| *counter.borrow_mut() += 1);

        state.load_from_file(path).unwrap();
        state.push_props(false);
        assert!(state.panel.toggle_value(0, 0, true));
        assert_eq!(state.panel.selected_filters().len(), 1);

        state.push_props(true);
        assert!(state.panel.selected_filters().is_empty());
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_every_new_query_clears_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_refiners(dir.path());
        let mut state = AppState::new(|_: &[RefinementFilter]| {});
        state.load_from_file(path).unwrap();

        state.reset_panel();
        assert!(state.panel.toggle_value(0, 0, true));
        state.reset_panel();
        assert!(state.panel.selected_filters().is_empty());

        assert!(state.panel.toggle_value(0, 0, true));
        state.reset_panel();
        assert!(state.panel.selected_filters().is_empty());
        assert!(!state.panel.view().show_remove_all);
    }

    #[test]
    fn test_opening_other_file_is_new() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_refiners(dir.path());
        let mut state = AppState::new(|_: &[RefinementFilter]| {});

        assert!(state.is_new_file(&path));
        state.load_from_file(path.clone()).unwrap();
        state.push_props(false);
        assert!(!state.is_new_file(&path));
        assert!(state.panel.toggle_value(0, 0, true));

        let other = dir.path().join("other.json");
        let contents = json!({
            "availableFilters": [
                {"FilterName": "Size", "Values": [
                    {"RefinementValue": "M", "RefinementCount": 2, "RefinementToken": "size-m"}
                ]}
            ]
        });
        std::fs::write(&other, contents.to_string()).unwrap();

        assert!(state.is_new_file(&other));
        state.load_from_file(other).unwrap();
        state.reset_panel();

        assert!(state.panel.selected_filters().is_empty());
        assert!(!state.panel.view().show_remove_all);
    }

    #[test]
    fn test_empty_state_shows_placeholder() {
        let mut state = AppState::new(|_: &[RefinementFilter]| {});
        let view = state.panel.view();

        assert_eq!(view.placeholder.as_deref(), Some(NO_REFINERS_PLACEHOLDER));
        assert_eq!(state.get_window_title(), "Refiner Studio - No file loaded");
        assert!(state.reload().is_none());
    }
}

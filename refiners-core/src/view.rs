use crate::display::{format_value_label, resolve_display_name};
use crate::models::{AvailableFilter, RefinementFilter, RefinerConfiguration};
use crate::state::PanelState;

/// One checkbox inside a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub key: usize,
    pub label: String,
    pub checked: bool,
    pub filter: RefinementFilter,
}

/// A collapsible group of checkboxes for one facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    /// Position in the available filters
    pub key: usize,
    /// Raw facet name, used as the expansion identity
    pub filter_name: String,
    /// Header text after applying the refiner configuration
    pub name: String,
    pub is_collapsed: bool,
    pub items: Vec<CheckboxView>,
}

/// Everything a toolkit needs to draw the panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    pub groups: Vec<GroupView>,
    /// Shown instead of the group list when no filters are available
    pub placeholder: Option<String>,
    pub show_remove_all: bool,
}

impl PanelView {
    /// True when there is no group list to draw
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|group| &group.items)
            .filter(|item| item.checked)
            .count()
    }
}

/// Derive the render model from the panel inputs and its current state
pub fn build_view(
    available_filters: &[AvailableFilter],
    configuration: &[RefinerConfiguration],
    state: &PanelState,
    placeholder: Option<&str>,
) -> PanelView {
    let groups: Vec<GroupView> = available_filters
        .iter()
        .enumerate()
        .map(|(key, filter)| GroupView {
            key,
            filter_name: filter.filter_name.clone(),
            name: resolve_display_name(&filter.filter_name, configuration).to_string(),
            is_collapsed: !state.is_expanded(&filter.filter_name),
            items: filter
                .values
                .iter()
                .enumerate()
                .map(|(index, value)| CheckboxView {
                    key: index,
                    label: format_value_label(value),
                    checked: state.is_selected(&value.token),
                    filter: RefinementFilter::new(&filter.filter_name, value.clone()),
                })
                .collect(),
        })
        .collect();

    let placeholder = if groups.is_empty() {
        placeholder.map(str::to_string)
    } else {
        None
    };

    PanelView {
        groups,
        placeholder,
        show_remove_all: !state.selected_filters().is_empty(),
    }
}

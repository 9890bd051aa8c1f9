use tracing::debug;

use crate::models::{AvailableFilter, RefinementFilter, RefinerConfiguration, RefinerDocument};
use crate::state::{PanelEvent, PanelState};
use crate::view::{build_view, PanelView};

/// Receives the full selection every time the user changes it
pub trait FilterListener {
    fn on_update_filters(&mut self, selected_filters: &[RefinementFilter]);
}

impl<F> FilterListener for F
where
    F: FnMut(&[RefinementFilter]),
{
    fn on_update_filters(&mut self, selected_filters: &[RefinementFilter]) {
        self(selected_filters)
    }
}

/// Inputs owned by the parent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelProps {
    pub available_filters: Vec<AvailableFilter>,
    pub refiners_configuration: Vec<RefinerConfiguration>,
    /// Raised by the parent when a new search query starts
    pub reset_selected_filters: bool,
}

impl From<RefinerDocument> for PanelProps {
    fn from(document: RefinerDocument) -> Self {
        Self {
            available_filters: document.available_filters,
            refiners_configuration: document.refiners_configuration,
            reset_selected_filters: false,
        }
    }
}

/// Grouped checkbox filter panel
///
/// Holds the props given by the parent, the current [`PanelState`] and the
/// listener that is told about every user-initiated selection change.
///
/// Groups are expanded by facet name, so facets sharing a `FilterName`
/// expand and collapse together; `validate_refiners` reports such names.
pub struct FilterPanel {
    props: PanelProps,
    state: PanelState,
    listener: Box<dyn FilterListener>,
    placeholder: Option<String>,
}

impl std::fmt::Debug for FilterPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPanel")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl FilterPanel {
    /// Create and mount a panel
    pub fn mount(props: PanelProps, listener: impl FilterListener + 'static) -> Self {
        let mut panel = Self {
            props: PanelProps::default(),
            state: PanelState::new(),
            listener: Box::new(listener),
            placeholder: None,
        };
        panel.dispatch(PanelEvent::Mount);
        panel.set_props(props);
        panel
    }

    /// Text drawn when there are no filters to show
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn props(&self) -> &PanelProps {
        &self.props
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn selected_filters(&self) -> &[RefinementFilter] {
        self.state.selected_filters()
    }

    /// Replace the props; a rising reset flag clears the selection without notifying
    pub fn set_props(&mut self, props: PanelProps) {
        let reset_selected_filters = props.reset_selected_filters;
        self.props = props;
        self.dispatch(PanelEvent::PropsChanged {
            reset_selected_filters,
        });
    }

    /// Check or uncheck the value at `value` in the group at `group`
    /// Returns false when the indices do not address a rendered checkbox
    pub fn toggle_value(&mut self, group: usize, value: usize, checked: bool) -> bool {
        let Some(filter) = self
            .props
            .available_filters
            .get(group)
            .and_then(|available| available.refinement(value))
        else {
            return false;
        };

        self.dispatch(PanelEvent::ToggleValue { filter, checked });
        true
    }

    /// Check or uncheck a specific filter
    pub fn toggle_filter(&mut self, filter: RefinementFilter, checked: bool) {
        self.dispatch(PanelEvent::ToggleValue { filter, checked });
    }

    /// Expand or collapse the group at `group`
    /// Returns the new collapsed flag, or None for an unknown group
    pub fn toggle_group(&mut self, group: usize) -> Option<bool> {
        let name = self.props.available_filters.get(group)?.filter_name.clone();
        Some(self.toggle_group_named(&name))
    }

    /// Expand or collapse a group by facet name, returning the new collapsed flag
    pub fn toggle_group_named(&mut self, filter_name: &str) -> bool {
        self.dispatch(PanelEvent::ToggleGroup {
            name: filter_name.to_string(),
        });
        !self.state.is_expanded(filter_name)
    }

    pub fn remove_all(&mut self) {
        self.dispatch(PanelEvent::RemoveAll);
    }

    /// Apply an event and notify the listener when the transition asks for it
    pub fn dispatch(&mut self, event: PanelEvent) {
        let transition = self.state.apply(&event);
        debug!(?event, selected = transition.state.selected_filters().len(), "panel event");

        self.state = transition.state;
        if let Some(selected_filters) = transition.notify {
            self.listener.on_update_filters(&selected_filters);
        }
    }

    /// Current render model
    pub fn view(&self) -> PanelView {
        build_view(
            &self.props.available_filters,
            &self.props.refiners_configuration,
            &self.state,
            self.placeholder.as_deref(),
        )
    }
}

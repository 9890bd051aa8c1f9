use std::collections::BTreeSet;

use crate::models::RefinementFilter;

/// Something that happened to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The panel was attached to its parent
    Mount,
    /// A checkbox changed
    ToggleValue {
        filter: RefinementFilter,
        checked: bool,
    },
    /// The "remove all" link was clicked
    RemoveAll,
    /// A group header was clicked
    ToggleGroup { name: String },
    /// The parent pushed new props
    PropsChanged { reset_selected_filters: bool },
}

/// Transient view state of the panel
///
/// Values are never mutated in place; [`PanelState::apply`] returns the next state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    expanded_groups: BTreeSet<String>,
    selected_filters: Vec<RefinementFilter>,
    reset_signal: bool,
}

/// Result of applying an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PanelState,
    /// Selection to report to the parent, if the event was a user-initiated selection change
    pub notify: Option<Vec<RefinementFilter>>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected filters in selection order
    pub fn selected_filters(&self) -> &[RefinementFilter] {
        &self.selected_filters
    }

    /// Facet names of the expanded groups
    pub fn expanded_groups(&self) -> impl Iterator<Item = &str> {
        self.expanded_groups.iter().map(String::as_str)
    }

    pub fn is_expanded(&self, filter_name: &str) -> bool {
        self.expanded_groups.contains(filter_name)
    }

    /// Whether a filter with this token is selected
    pub fn is_selected(&self, token: &str) -> bool {
        self.selected_filters
            .iter()
            .any(|filter| filter.token() == token)
    }

    /// Compute the state that follows `event`
    pub fn apply(&self, event: &PanelEvent) -> Transition {
        match event {
            PanelEvent::Mount => self.silent(self.with_selection(Vec::new())),
            PanelEvent::ToggleValue { filter, checked } => {
                let selection = if *checked {
                    self.added(filter)
                } else {
                    self.removed(filter.token())
                };
                self.notifying(selection)
            }
            PanelEvent::RemoveAll => self.notifying(Vec::new()),
            PanelEvent::ToggleGroup { name } => {
                let mut expanded_groups = self.expanded_groups.clone();
                if !expanded_groups.remove(name) {
                    expanded_groups.insert(name.clone());
                }
                self.silent(PanelState {
                    expanded_groups,
                    ..self.clone()
                })
            }
            PanelEvent::PropsChanged {
                reset_selected_filters,
            } => {
                let rising = *reset_selected_filters && !self.reset_signal;
                let selected_filters = if rising {
                    Vec::new()
                } else {
                    self.selected_filters.clone()
                };
                self.silent(PanelState {
                    expanded_groups: self.expanded_groups.clone(),
                    selected_filters,
                    reset_signal: *reset_selected_filters,
                })
            }
        }
    }

    fn added(&self, filter: &RefinementFilter) -> Vec<RefinementFilter> {
        let mut selection = self.selected_filters.clone();
        if !self.is_selected(filter.token()) {
            selection.push(filter.clone());
        }
        selection
    }

    fn removed(&self, token: &str) -> Vec<RefinementFilter> {
        self.selected_filters
            .iter()
            .filter(|filter| filter.token() != token)
            .cloned()
            .collect()
    }

    fn with_selection(&self, selected_filters: Vec<RefinementFilter>) -> PanelState {
        PanelState {
            selected_filters,
            ..self.clone()
        }
    }

    fn notifying(&self, selection: Vec<RefinementFilter>) -> Transition {
        Transition {
            state: self.with_selection(selection.clone()),
            notify: Some(selection),
        }
    }

    fn silent(&self, state: PanelState) -> Transition {
        Transition {
            state,
            notify: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RefinementValue;
    use proptest::prelude::*;

    fn red() -> RefinementFilter {
        RefinementFilter::new("Color", RefinementValue::new("Red", "red", 3))
    }

    fn blue() -> RefinementFilter {
        RefinementFilter::new("Color", RefinementValue::new("Blue", "blue", 1))
    }

    fn toggle(filter: RefinementFilter, checked: bool) -> PanelEvent {
        PanelEvent::ToggleValue { filter, checked }
    }

    fn group(name: &str) -> PanelEvent {
        PanelEvent::ToggleGroup {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_check_then_uncheck_notifies_both_times() {
        let checked = PanelState::new().apply(&toggle(red(), true));
        assert_eq!(checked.state.selected_filters(), &[red()]);
        assert_eq!(checked.notify, Some(vec![red()]));

        let unchecked = checked.state.apply(&toggle(red(), false));
        assert!(unchecked.state.selected_filters().is_empty());
        assert_eq!(unchecked.notify, Some(Vec::new()));
    }

    #[test]
    fn test_selection_keeps_order() {
        let state = PanelState::new()
            .apply(&toggle(blue(), true))
            .state
            .apply(&toggle(red(), true))
            .state;
        assert_eq!(state.selected_filters(), &[blue(), red()]);
    }

    #[test]
    fn test_uncheck_removes_every_matching_token() {
        let mut same_token = blue();
        same_token.filter_name = "Shade".to_string();

        let state = PanelState {
            selected_filters: vec![blue(), red(), same_token],
            ..PanelState::default()
        };
        let next = state.apply(&toggle(blue(), false));
        assert_eq!(next.state.selected_filters(), &[red()]);
    }

    #[test]
    fn test_check_selected_token_keeps_single_entry() {
        let state = PanelState::new().apply(&toggle(red(), true)).state;
        let next = state.apply(&toggle(red(), true));
        assert_eq!(next.state.selected_filters(), &[red()]);
        assert_eq!(next.notify, Some(vec![red()]));
    }

    #[test]
    fn test_remove_all() {
        let state = PanelState::new()
            .apply(&toggle(red(), true))
            .state
            .apply(&toggle(blue(), true))
            .state;
        let next = state.apply(&PanelEvent::RemoveAll);
        assert!(next.state.selected_filters().is_empty());
        assert_eq!(next.notify, Some(Vec::new()));
    }

    #[test]
    fn test_groups_collapsed_by_default_and_toggle() {
        let state = PanelState::new();
        assert!(!state.is_expanded("Color"));

        let state = state.apply(&group("Size")).state.apply(&group("Color")).state;
        assert!(state.is_expanded("Size"));
        assert!(state.is_expanded("Color"));

        let state = state.apply(&group("Size")).state;
        assert!(!state.is_expanded("Size"));
        assert_eq!(state.expanded_groups().collect::<Vec<_>>(), vec!["Color"]);
    }

    #[test]
    fn test_group_toggle_does_not_notify() {
        let next = PanelState::new().apply(&group("Color"));
        assert_eq!(next.notify, None);
    }

    #[test]
    fn test_mount_clears_selection_silently() {
        let state = PanelState::new().apply(&toggle(red(), true)).state;
        let next = state.apply(&PanelEvent::Mount);
        assert!(next.state.selected_filters().is_empty());
        assert_eq!(next.notify, None);
    }

    #[test]
    fn test_reset_only_on_rising_edge() {
        let reset = |flag| PanelEvent::PropsChanged {
            reset_selected_filters: flag,
        };

        let state = PanelState::new().apply(&toggle(red(), true)).state;

        let unchanged = state.apply(&reset(false));
        assert_eq!(unchanged.state.selected_filters(), &[red()]);

        let cleared = unchanged.state.apply(&reset(true));
        assert!(cleared.state.selected_filters().is_empty());
        assert_eq!(cleared.notify, None);

        // Flag still raised: a new selection survives further prop updates
        let reselected = cleared.state.apply(&toggle(blue(), true)).state;
        let held = reselected.apply(&reset(true));
        assert_eq!(held.state.selected_filters(), &[blue()]);

        let lowered = held.state.apply(&reset(false)).state;
        let cleared_again = lowered.apply(&reset(true));
        assert!(cleared_again.state.selected_filters().is_empty());
    }

    #[test]
    fn test_reset_keeps_expanded_groups() {
        let state = PanelState::new().apply(&group("Color")).state;
        let next = state.apply(&PanelEvent::PropsChanged {
            reset_selected_filters: true,
        });
        assert!(next.state.is_expanded("Color"));
    }

    fn arb_filter() -> impl Strategy<Value = RefinementFilter> {
        ("[A-C]", "[a-e]", 0u64..50).prop_map(|(facet, token, count)| {
            RefinementFilter::new(
                facet,
                RefinementValue::new(token.to_uppercase(), token, count),
            )
        })
    }

    fn arb_event() -> impl Strategy<Value = PanelEvent> {
        prop_oneof![
            (arb_filter(), any::<bool>())
                .prop_map(|(filter, checked)| PanelEvent::ToggleValue { filter, checked }),
            Just(PanelEvent::RemoveAll),
            "[A-C]".prop_map(|name| PanelEvent::ToggleGroup { name }),
            any::<bool>().prop_map(|reset_selected_filters| PanelEvent::PropsChanged {
                reset_selected_filters
            }),
        ]
    }

    fn replay(events: &[PanelEvent]) -> PanelState {
        events
            .iter()
            .fold(PanelState::new(), |state, event| state.apply(event).state)
    }

    proptest! {
        #[test]
        fn prop_tokens_stay_unique(events in prop::collection::vec(arb_event(), 0..40)) {
            let state = replay(&events);
            let mut tokens: Vec<_> = state.selected_filters().iter().map(|f| f.token()).collect();
            let total = tokens.len();
            tokens.sort();
            tokens.dedup();
            prop_assert_eq!(tokens.len(), total);
        }

        #[test]
        fn prop_check_then_uncheck_restores_selection(
            events in prop::collection::vec(arb_event(), 0..40),
            filter in arb_filter(),
        ) {
            let state = replay(&events);
            prop_assume!(!state.is_selected(filter.token()));

            let checked = state.apply(&toggle(filter.clone(), true)).state;
            prop_assert!(checked.is_selected(filter.token()));
            let unchecked = checked.apply(&toggle(filter, false)).state;
            prop_assert_eq!(unchecked.selected_filters(), state.selected_filters());
        }

        #[test]
        fn prop_expansion_tracks_header_clicks(clicks in prop::collection::vec("[A-C]", 0..30)) {
            let state = clicks
                .iter()
                .fold(PanelState::new(), |state, name| state.apply(&group(name)).state);

            for name in ["A", "B", "C"] {
                let odd = clicks.iter().filter(|click| click.as_str() == name).count() % 2 == 1;
                prop_assert_eq!(state.is_expanded(name), odd);
            }
        }

        #[test]
        fn prop_every_user_change_notifies_current_selection(
            events in prop::collection::vec(arb_event(), 1..40),
        ) {
            let mut state = PanelState::new();
            for event in &events {
                let transition = state.apply(event);
                if let Some(reported) = &transition.notify {
                    prop_assert_eq!(reported.as_slice(), transition.state.selected_filters());
                }
                state = transition.state;
            }
        }
    }
}

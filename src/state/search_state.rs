use refiners_core::RefinementFilter;
use tracing::info;

/// Search-side state owned by the window, the parent of the filter panel
#[derive(Debug, Default)]
pub struct SearchState {
    /// Filters reported by the panel, used by the next query
    pub applied_filters: Vec<RefinementFilter>,
    /// Number of queries started in this session
    pub query_count: u32,
    /// Whether the next props update should ask the panel to reset
    reset_requested: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query; the panel selection is reset on the next props update
    pub fn begin_query(&mut self) {
        self.query_count += 1;
        self.applied_filters.clear();
        self.reset_requested = true;
        info!(query = self.query_count, "new search query");
    }

    /// Reset flag to send with the next props update
    /// The flag is raised for exactly one update after [`SearchState::begin_query`]
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    /// Record the selection reported by the panel
    pub fn record_filters(&mut self, selected: &[RefinementFilter]) {
        self.applied_filters = selected.to_vec();
        info!(filters = self.applied_filters.len(), "refiners updated");
    }
}

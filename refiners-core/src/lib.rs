pub mod display;
pub mod error;
pub mod io;
pub mod models;
pub mod panel;
pub mod state;
pub mod validation;
pub mod view;

pub use display::{format_active_filters, format_value_label, resolve_display_name};
pub use error::RefinerError;
pub use io::{load_refiners, parse_refiners, save_refiners};
pub use models::{
    AvailableFilter, RefinementFilter, RefinementValue, RefinerConfiguration, RefinerDocument,
};
pub use panel::{FilterListener, FilterPanel, PanelProps};
pub use state::{PanelEvent, PanelState, Transition};
pub use validation::validate_refiners;
pub use view::{build_view, CheckboxView, GroupView, PanelView};

pub mod app_state;
pub mod search_state;

pub use app_state::AppState;
pub use search_state::SearchState;

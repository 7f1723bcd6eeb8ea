//! Application state (pure core).
//!
//! Every transition here is synchronous and side-effect free apart from
//! tracing, so the whole loading/filtering state machine is testable without
//! a terminal or a network.

mod app_state;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod search_input_handler;
pub mod selection;

pub use app_state::{AppState, FocusPane};
pub use filter::{filter_indices, matches_term, FilterView};
pub use pagination::{PageOutcome, PaginationState, DEFAULT_PAGE_SIZE};
pub use search::SearchInput;
pub use selection::SelectionState;

//! Domain model types (pure).

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod launch;

pub use error::{AppError, FetchError};
pub use identifiers::LaunchId;
pub use key_action::KeyAction;
pub use launch::{years_since, LaunchLinks, LaunchRecord, StatusBadge, NO_DETAILS_PLACEHOLDER};

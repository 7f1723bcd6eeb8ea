//! launchdeck
//!
//! Terminal viewer for spaceflight launch records: an incrementally loaded
//! card list with mission-name search and one expandable detail panel.
//!
//! Pure state lives in [`state`] and [`view_state`]; [`source`] fetches pages
//! and [`view`] owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

//! Identifier newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a launch record (the flight number).
///
/// Selection and the last-card observer key on this value, never on
/// structural equality of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchId(u32);

impl LaunchId {
    /// Wrap a raw flight number.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw flight number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

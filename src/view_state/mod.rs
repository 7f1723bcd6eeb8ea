//! View-layer state that is independent of the terminal backend.

pub mod observer;
pub mod viewport;

pub use observer::{LastCardObserver, ObservedCard};
pub use viewport::{wrap_words, ListViewport};

//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that key bindings map onto.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation
    /// Select the previous card. Default: k/↑
    SelectPrev,
    /// Select the next card. Default: j/↓
    SelectNext,
    /// Move the selection up by one screen. Default: Ctrl+u/Page Up
    PageUp,
    /// Move the selection down by one screen. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first card. Default: g/Home
    SelectFirst,
    /// Jump to the last loaded card. Default: G/End
    SelectLast,

    // Card interaction
    /// Show or hide the detail panel of the selected card. Default: Enter/Space
    ToggleDetails,

    // Search
    /// Focus the search box. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search term. Default: Ctrl+l
    ClearSearch,

    // Loading
    /// Ask for the next page without scrolling. Default: r
    LoadMore,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Toggle the keyboard shortcut overlay. Default: ?
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let set: HashSet<KeyAction> = [
            KeyAction::SelectPrev,
            KeyAction::SelectNext,
            KeyAction::ToggleDetails,
            KeyAction::LoadMore,
            KeyAction::SelectNext,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn toggle_details_not_equal_load_more() {
        assert_ne!(KeyAction::ToggleDetails, KeyAction::LoadMore);
    }
}

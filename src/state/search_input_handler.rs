//! Search input handling (pure state transitions).
//!
//! All functions are pure - no side effects, testable without TUI.

use crate::state::SearchInput;

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(mut input: SearchInput, ch: char) -> SearchInput {
    let offset = input.byte_offset(input.cursor());
    let (query, cursor) = input.parts_mut();
    query.insert(offset, ch);
    *cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: SearchInput) -> SearchInput {
    if input.cursor() == 0 {
        return input;
    }
    let offset = input.byte_offset(input.cursor() - 1);
    let (query, cursor) = input.parts_mut();
    query.remove(offset);
    *cursor -= 1;
    input
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut input: SearchInput) -> SearchInput {
    if input.cursor() >= input.char_len() {
        return input;
    }
    let offset = input.byte_offset(input.cursor());
    let (query, _) = input.parts_mut();
    query.remove(offset);
    input
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut input: SearchInput) -> SearchInput {
    let (_, cursor) = input.parts_mut();
    *cursor = cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position. Saturates at the query length.
pub fn handle_cursor_right(mut input: SearchInput) -> SearchInput {
    let max_cursor = input.char_len();
    let (_, cursor) = input.parts_mut();
    *cursor = (*cursor + 1).min(max_cursor);
    input
}

/// Move cursor to the start.
pub fn handle_cursor_home(mut input: SearchInput) -> SearchInput {
    let (_, cursor) = input.parts_mut();
    *cursor = 0;
    input
}

/// Move cursor past the last character.
pub fn handle_cursor_end(mut input: SearchInput) -> SearchInput {
    let max_cursor = input.char_len();
    let (_, cursor) = input.parts_mut();
    *cursor = max_cursor;
    input
}

/// Empty the query.
pub fn clear_search(_input: SearchInput) -> SearchInput {
    SearchInput::new()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;

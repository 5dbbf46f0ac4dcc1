//! Search input handling (pure state transitions).
//!
//! Handles text editing for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.

use crate::state::SearchState;

/// Byte index of the `cursor`-th character of `query`.
fn byte_index(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map_or(query.len(), |(i, _)| i)
}

/// Insert a character at the cursor and advance the cursor.
///
/// No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_index(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor, if any.
///
/// No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_index(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one character. Saturates at the query length.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Focus the search bar, keeping the current query with the cursor at its end.
///
/// No-op if already typing.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Idle { query } => {
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        other => other,
    }
}

/// Leave the search bar. The query stays applied.
pub fn leave_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } => SearchState::Idle { query },
        other => other,
    }
}

/// Empty the query, staying in the current mode.
pub fn clear_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { .. } => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Idle { .. } => SearchState::default(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;

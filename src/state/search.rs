//! Search bar state machine.
//!
//! SearchState is a sum type for the two states of the search bar:
//! - Idle: query (possibly empty) is applied, keys go to the list
//! - Typing: keys edit the query; the list follows every keystroke

/// Search bar state. Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// Query applied, bar not focused.
    Idle { query: String },
    /// Bar focused. `cursor` counts characters, not bytes.
    Typing { query: String, cursor: usize },
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::Idle {
            query: String::new(),
        }
    }
}

impl SearchState {
    /// Idle state holding `query`.
    pub fn with_query(query: impl Into<String>) -> Self {
        SearchState::Idle {
            query: query.into(),
        }
    }

    /// Current query text in either state.
    pub fn query(&self) -> &str {
        match self {
            SearchState::Idle { query } | SearchState::Typing { query, .. } => query,
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }

    /// Cursor position in characters while typing.
    pub fn cursor(&self) -> Option<usize> {
        match self {
            SearchState::Typing { cursor, .. } => Some(*cursor),
            SearchState::Idle { .. } => None,
        }
    }
}

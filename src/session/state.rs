use std::fmt;

/// Lifecycle of a rename session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Neither find nor replace is set; proposed names equal current names
    Idle,
    /// A find and/or replace value is active
    Previewing,
    /// The proposed names were applied
    Confirmed,
    /// The session was discarded without renaming anything
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Confirmed | SessionState::Cancelled)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::Idle => "idle",
            SessionState::Previewing => "previewing",
            SessionState::Confirmed => "confirmed",
            SessionState::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

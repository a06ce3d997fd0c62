//! Rename session module
//!
//! This module contains the engine that ties a selection, a find pattern, a
//! replace template and the preset store together, and the hooks it uses to
//! talk to the host and the user.

mod engine;
mod entry;
mod host;
mod prompt;
mod report;
mod state;

pub use engine::RenameSession;
pub use entry::{
    Target, find_replace_media_panel, find_replace_timeline, scope_selection_media_panel,
    scope_selection_timeline,
};
pub use host::{Host, LogHost};
pub use prompt::{FixedPrompter, Prompter, StdinPrompter};
pub use report::{DeleteOutcome, RenameOutcome, RenameReport, SaveOutcome};
pub use state::SessionState;

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hosts;
pub mod item;
pub mod logging;
pub mod pattern;
pub mod presets;
pub mod session;
pub mod tokens;
mod utils;
pub mod workflow;

pub use utils::config_dir;

pub mod prelude {
    pub use crate::errors::{
        generic_error, mutation_error, pattern_compile_error, persistence_error,
        session_closed_error, validation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::item::{ItemKind, RenameTarget, Selection};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::pattern::{CompiledPattern, WildcardMode};
    pub use crate::presets::{Preset, PresetStore};
    pub use crate::session::{
        FixedPrompter, Host, LogHost, Prompter, RenameSession, SessionState, StdinPrompter,
        Target, find_replace_media_panel, find_replace_timeline, scope_selection_media_panel,
        scope_selection_timeline,
    };
    pub use crate::tokens::{RunContext, Token};
    pub use crate::workflow::{Action, RunOptions, execute};
}

//! Workflow context
//!
//! This module defines what a run is asked to do and what it reports back.

use std::path::PathBuf;

use crate::session::{RenameOutcome, RenameReport, SessionState};

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Preview and rename the selection
    Rename,
    /// Print the saved presets
    ListPresets,
    /// Save a find and replace pair under a name
    SavePreset {
        name: String,
        find: String,
        replace: String,
    },
    /// Delete a preset by name
    DeletePreset { name: String },
    /// Print the tokens and wildcards for the selection
    ListTokens,
}

/// Options shared by every action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Explicit configuration file; the per-user one is used otherwise
    pub config_path: Option<PathBuf>,
    pub find: Option<String>,
    pub replace: Option<String>,
    /// Preset to load before `find` and `replace` are applied
    pub preset: Option<String>,
    /// Manifest whose items are renamed instead of files
    pub manifest: Option<PathBuf>,
    /// Files and directories to rename; empty means the current directory
    pub paths: Vec<PathBuf>,
    /// Treat the selection as timeline items
    pub timeline: bool,
    /// Compile `*` as any sequence of characters
    pub any_sequence: bool,
    /// Preview only
    pub dry_run: bool,
}

/// A proposed rename shown in the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: String,
    pub to: String,
}

impl PlannedRename {
    pub fn changes(&self) -> bool {
        self.from != self.to
    }
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of items in the selection
    pub items_selected: usize,
    /// Number of items renamed
    pub items_renamed: usize,
    /// Number of items whose name did not change
    pub items_skipped: usize,
    /// Number of items the host refused to rename
    pub errors: usize,
}

/// State carried through a run and returned to the caller
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    pub options: RunOptions,
    /// Final session state, if the action opened a session
    pub state: Option<SessionState>,
    pub stats: WorkflowStats,
    pub planned_renames: Vec<PlannedRename>,
}

impl WorkflowContext {
    pub fn new(options: RunOptions) -> Self {
        WorkflowContext {
            options,
            state: None,
            stats: WorkflowStats::default(),
            planned_renames: Vec::new(),
        }
    }

    pub fn add_planned_rename(&mut self, from: &str, to: &str) {
        self.planned_renames.push(PlannedRename {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    /// Number of planned renames that change a name
    pub fn pending_changes(&self) -> usize {
        self.planned_renames.iter().filter(|p| p.changes()).count()
    }

    /// Folds a confirmed session's outcomes into the statistics
    pub fn record_report(&mut self, report: &RenameReport) {
        for outcome in &report.outcomes {
            match outcome {
                RenameOutcome::Renamed { .. } => self.stats.items_renamed += 1,
                RenameOutcome::Skipped { .. } => self.stats.items_skipped += 1,
                RenameOutcome::Failed { .. } => self.stats.errors += 1,
            }
        }
    }
}

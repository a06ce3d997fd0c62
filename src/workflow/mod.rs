//! Workflow module
//!
//! This module contains components for orchestrating the workflow steps.

mod context;
mod engine;

pub use context::{Action, PlannedRename, RunOptions, WorkflowContext, WorkflowStats};
pub use engine::execute;

//! Outcomes of session operations

/// What happened to one item when the session was confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The proposed name was applied
    Renamed { from: String, to: String },
    /// The proposed name equals the current one
    Skipped { name: String },
    /// The host refused the new name
    Failed {
        name: String,
        proposed: String,
        error: String,
    },
}

/// Per-item outcomes of a confirmed session, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn renamed(&self) -> usize {
        self.count(|outcome| matches!(outcome, RenameOutcome::Renamed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, RenameOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, RenameOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|outcome| predicate(outcome)).count()
    }
}

/// Result of saving the active fields as a preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new preset was added; `persisted` is false if the write failed
    Added { name: String, persisted: bool },
    /// An existing preset was overwritten after confirmation
    Overwritten { name: String, persisted: bool },
    /// The name already existed and the user declined to overwrite it
    Declined { name: String },
    /// The user did not give a name
    Cancelled,
}

/// Result of deleting the selected preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The preset was removed; `persisted` is false if the write failed and
    /// the preset was put back
    Deleted { name: String, persisted: bool },
    /// The user declined the deletion
    Declined { name: String },
    /// No preset was selected
    NothingSelected,
}

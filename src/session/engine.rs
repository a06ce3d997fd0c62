//! Rename session
//!
//! A session holds the find and replace fields for one run, keeps the
//! proposed names up to date on every edit, and applies them on confirm.

use log::{debug, error, info, warn};

use crate::constants::WILDCARDS;
use crate::errors::{Result, session_closed_error, validation_error};
use crate::item::Selection;
use crate::pattern::{CompiledPattern, WildcardMode};
use crate::presets::{Preset, PresetStore};
use crate::tokens::{ContextTokens, RunContext, Token, TokenResolver, sanitize_replace};

use super::host::Host;
use super::prompt::Prompter;
use super::report::{DeleteOutcome, RenameOutcome, RenameReport, SaveOutcome};
use super::state::SessionState;

const OVERWRITE_TITLE: &str = "Overwrite Existing Preset";
const OVERWRITE_MESSAGE: &str =
    "Are you sure want to permanently overwrite this preset? This operation cannot be undone.";
const DELETE_TITLE: &str = "Confirm Operation";
const DELETE_MESSAGE: &str =
    "Are you sure want to permanently delete this preset? This operation cannot be undone.";

/// One find and replace run over a selection
pub struct RenameSession<'a> {
    selection: Selection<'a>,
    resolver: TokenResolver,
    store: PresetStore,
    mode: WildcardMode,
    find: String,
    replace: String,
    pattern: CompiledPattern,
    resolved: Vec<String>,
    proposed: Vec<String>,
    selected_preset: Option<String>,
    state: SessionState,
}

impl<'a> RenameSession<'a> {
    /// Starts a session over `selection`
    ///
    /// Tokens are computed once from `context` and the items' context values.
    /// When the store holds presets the first one is selected and loaded.
    ///
    /// # Errors
    /// Returns a pattern error if the first preset's find text cannot be compiled.
    pub fn new(
        selection: Selection<'a>,
        context: &RunContext,
        lookup: ContextTokens,
        store: PresetStore,
        mode: WildcardMode,
    ) -> Result<Self> {
        let resolver = TokenResolver::new(context, &selection, lookup);
        let proposed = selection.names();
        let resolved = resolver.resolve_all("");

        let mut session = RenameSession {
            selection,
            resolver,
            store,
            mode,
            find: String::new(),
            replace: String::new(),
            pattern: CompiledPattern::empty(),
            resolved,
            proposed,
            selected_preset: None,
            state: SessionState::Idle,
        };

        if let Some(first) = session.store.presets().first().cloned() {
            session.load_preset(&first)?;
        }
        debug!(
            "Session started with {} item(s), state {}",
            session.selection.len(),
            session.state
        );

        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn find(&self) -> &str {
        &self.find
    }

    /// The replace field after sanitization
    pub fn replace(&self) -> &str {
        &self.replace
    }

    pub fn mode(&self) -> WildcardMode {
        self.mode
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Current names in selection order
    pub fn names(&self) -> Vec<String> {
        self.selection.names()
    }

    /// Proposed names in selection order
    pub fn proposed_names(&self) -> &[String] {
        &self.proposed
    }

    /// Replace template resolved for each item
    pub fn resolved_replacements(&self) -> &[String] {
        &self.resolved
    }

    /// (current, proposed) pairs in selection order
    pub fn preview(&self) -> Vec<(String, String)> {
        self.names().into_iter().zip(self.proposed.iter().cloned()).collect()
    }

    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    pub fn store(&self) -> &PresetStore {
        &self.store
    }

    pub fn into_store(self) -> PresetStore {
        self.store
    }

    /// Tokens to offer for the replace field
    pub fn available_tokens(&self) -> Vec<Token> {
        self.resolver.available_tokens()
    }

    /// Wildcard legend for the find field
    pub fn wildcards(&self) -> &'static [(&'static str, &'static str)] {
        WILDCARDS
    }

    /// Sets the find field and recomputes the proposed names
    ///
    /// An empty find string restores every proposed name to the current name.
    pub fn set_find(&mut self, find: &str) -> Result<()> {
        self.ensure_open()?;
        self.pattern = CompiledPattern::compile(find, self.mode)?;
        self.find = find.to_string();
        self.recompute_names();
        self.update_state();
        Ok(())
    }

    /// Sets the replace field
    ///
    /// The text is sanitized first, then resolved for every item. Proposed
    /// names change only while a find pattern is active.
    pub fn set_replace(&mut self, replace: &str) -> Result<()> {
        self.ensure_open()?;
        self.replace = sanitize_replace(replace);
        self.resolved = self.resolver.resolve_all(&self.replace);
        if !self.pattern.is_empty() {
            self.recompute_names();
        }
        self.update_state();
        Ok(())
    }

    /// Loads the named preset into the find and replace fields
    ///
    /// Returns false when the store has no preset with that name.
    pub fn select_preset(&mut self, name: &str) -> Result<bool> {
        self.ensure_open()?;
        match self.store.get(name).cloned() {
            Some(preset) => {
                self.load_preset(&preset)?;
                Ok(true)
            }
            None => {
                warn!("No preset named {name}");
                Ok(false)
            }
        }
    }

    /// Re-reads the preset file, discarding unsaved preset edits
    pub fn reload_presets(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.store.reload()?;
        if let Some(name) = &self.selected_preset
            && !self.store.is_duplicate_name(name)
        {
            self.selected_preset = None;
        }
        Ok(())
    }

    /// Saves the current find and replace fields as a preset
    ///
    /// An empty name is reported and asked for again. Overwriting an existing
    /// name needs confirmation; declining leaves the store and the file as
    /// they were. A failed write is reported through `prompter` and keeps the
    /// in-memory change, leaving the store dirty.
    pub fn save_preset(&mut self, prompter: &mut dyn Prompter) -> Result<SaveOutcome> {
        self.ensure_open()?;

        let name = loop {
            match prompter.ask_preset_name(self.selected_preset.as_deref()) {
                None => return Ok(SaveOutcome::Cancelled),
                Some(name) if name.trim().is_empty() => {
                    let err = validation_error("preset name", "must not be empty");
                    prompter.notify_error("Invalid Preset Name", &err.to_string());
                }
                Some(name) => break name,
            }
        };

        let overwritten = if self.store.is_duplicate_name(&name) {
            if !prompter.confirm(OVERWRITE_TITLE, OVERWRITE_MESSAGE) {
                info!("Kept existing preset {name}");
                return Ok(SaveOutcome::Declined { name });
            }
            self.store.overwrite(&name, &self.find, &self.replace);
            true
        } else {
            self.store.add(&name, &self.find, &self.replace);
            self.store.sort_by_name();
            false
        };

        let persisted = self.persist(prompter);
        if persisted {
            info!("{name} preset saved to {}", self.store.path().display());
        }
        self.selected_preset = Some(name.clone());

        Ok(if overwritten {
            SaveOutcome::Overwritten { name, persisted }
        } else {
            SaveOutcome::Added { name, persisted }
        })
    }

    /// Deletes the selected preset after confirmation
    ///
    /// The store is written and reloaded, so memory matches disk afterwards.
    /// If the write fails the presets are restored as they were before the
    /// deletion and the selection is left alone. Otherwise the first
    /// remaining preset is selected, or none.
    pub fn delete_preset(&mut self, prompter: &mut dyn Prompter) -> Result<DeleteOutcome> {
        self.ensure_open()?;

        let Some(name) = self.selected_preset.clone() else {
            return Ok(DeleteOutcome::NothingSelected);
        };
        if !prompter.confirm(DELETE_TITLE, DELETE_MESSAGE) {
            return Ok(DeleteOutcome::Declined { name });
        }

        let snapshot = self.store.clone();
        let matching: Vec<Preset> = self
            .store
            .presets()
            .iter()
            .filter(|preset| preset.name == name)
            .cloned()
            .collect();
        for preset in &matching {
            self.store.delete(preset);
        }

        if !self.persist(prompter) {
            warn!("{name} preset kept, {} was not written", self.store.path().display());
            self.store = snapshot;
            return Ok(DeleteOutcome::Deleted {
                name,
                persisted: false,
            });
        }
        self.store.reload()?;

        match self.store.presets().first().cloned() {
            Some(first) => self.load_preset(&first)?,
            None => self.selected_preset = None,
        }

        Ok(DeleteOutcome::Deleted {
            name,
            persisted: true,
        })
    }

    /// Applies the proposed names
    ///
    /// Items whose name would not change are skipped. A rename the host
    /// refuses is reported and the remaining items are still processed. The
    /// host is refreshed once at the end.
    pub fn confirm(&mut self, host: &mut dyn Host) -> Result<RenameReport> {
        self.ensure_open()?;

        let mut report = RenameReport::default();
        for (item, new_name) in self.selection.items_mut().zip(self.proposed.iter()) {
            let name = item.name();
            if &name == new_name {
                info!("Skipping {name}. No change to name.");
                report.outcomes.push(RenameOutcome::Skipped { name });
                continue;
            }

            match item.set_name(new_name) {
                Ok(()) => {
                    info!("Renamed {name} to {new_name}");
                    report.outcomes.push(RenameOutcome::Renamed {
                        from: name,
                        to: new_name.clone(),
                    });
                }
                Err(e) => {
                    error!("Failed to rename {name} to {new_name}: {e}");
                    report.outcomes.push(RenameOutcome::Failed {
                        name,
                        proposed: new_name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        host.refresh();
        self.state = SessionState::Confirmed;
        info!("Done!");

        Ok(report)
    }

    /// Discards the proposed names without renaming anything
    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.proposed = self.selection.names();
        self.state = SessionState::Cancelled;
        info!("Cancelled!");
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state.is_terminal() {
            return Err(session_closed_error(&self.state.to_string()));
        }
        Ok(())
    }

    fn load_preset(&mut self, preset: &Preset) -> Result<()> {
        self.set_find(&preset.find)?;
        self.set_replace(&preset.replace)?;
        self.selected_preset = Some(preset.name.clone());
        Ok(())
    }

    fn persist(&mut self, prompter: &mut dyn Prompter) -> bool {
        match self.store.save() {
            Ok(()) => true,
            Err(e) => {
                prompter.notify_error(
                    "Error",
                    &format!("Check permissions on {}: {e}", self.store.path().display()),
                );
                false
            }
        }
    }

    fn recompute_names(&mut self) {
        let names = self.selection.names();
        self.proposed = if self.pattern.is_empty() {
            names
        } else {
            names
                .iter()
                .zip(self.resolved.iter())
                .map(|(name, replacement)| self.pattern.apply(name, replacement))
                .collect()
        };
    }

    fn update_state(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = if self.find.is_empty() && self.replace.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Previewing
        };
    }
}

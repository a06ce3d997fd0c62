//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, bail};
use colored::Colorize;
use log::{debug, info, warn};

use crate::config::{AppConfig, read_or_default};
use crate::hosts::{FsItem, Manifest, scan_directory};
use crate::item::{ItemKind, RenameTarget, Selection};
use crate::logging::format_message;
use crate::pattern::WildcardMode;
use crate::presets::PresetStore;
use crate::session::{DeleteOutcome, LogHost, Prompter, RenameSession, SaveOutcome, Target};
use crate::tokens::RunContext;

use super::context::{Action, RunOptions, WorkflowContext};

/// Settings resolved from the configuration file and the options
struct Environment {
    mode: WildcardMode,
    context: RunContext,
    store: PresetStore,
    target: Target,
}

impl Environment {
    fn load(options: &RunOptions) -> Result<Self> {
        let config: AppConfig = read_or_default(options.config_path.clone())?;
        let mode = if options.any_sequence {
            WildcardMode::AnySequence
        } else {
            config.wildcard_mode
        };
        let store = PresetStore::load(config.presets_path()?)?;
        debug!("Using presets from {}", store.path().display());

        Ok(Environment {
            mode,
            context: RunContext::from_environment(config.project, config.user),
            store,
            target: if options.timeline {
                Target::Timeline
            } else {
                Target::MediaPanel
            },
        })
    }
}

/// Hands out a name given on the command line, forwarding everything else
struct NamedPrompter<'p> {
    name: Option<String>,
    inner: &'p mut dyn Prompter,
}

impl Prompter for NamedPrompter<'_> {
    fn ask_preset_name(&mut self, _default: Option<&str>) -> Option<String> {
        self.name.take()
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self.inner.confirm(title, message)
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        self.inner.notify_error(title, message);
    }
}

/// Runs one action
///
/// This function orchestrates the workflow steps:
/// 1. Read the configuration and the preset file
/// 2. Build the selection from the manifest, the given paths or the current directory
/// 3. Start a session and apply the preset, find and replace options
/// 4. Show the preview, then rename after confirmation or cancel on a dry run
/// 5. Write the manifest back if any of its items were renamed
///
/// # Errors
/// Returns an error if the configuration, the preset file or the selection
/// cannot be read, or the selection is not eligible for the chosen target.
pub fn execute(
    action: &Action,
    options: RunOptions,
    prompter: &mut dyn Prompter,
) -> Result<WorkflowContext> {
    let environment = Environment::load(&options)?;
    let mut context = WorkflowContext::new(options);

    match action {
        Action::Rename => rename(environment, &mut context, prompter)?,
        Action::ListPresets => list_presets(&environment.store),
        Action::SavePreset {
            name,
            find,
            replace,
        } => save_preset(environment, &mut context, prompter, name, find, replace)?,
        Action::DeletePreset { name } => delete_preset(environment, &mut context, prompter, name)?,
        Action::ListTokens => list_tokens(environment, &mut context)?,
    }

    Ok(context)
}

fn current_directory() -> Result<PathBuf> {
    env::current_dir().map_err(|e| anyhow!("Failed to read the current directory: {e}"))
}

fn collect_fs_items(paths: &[PathBuf]) -> Result<Vec<FsItem>> {
    if paths.is_empty() {
        return Ok(scan_directory(&current_directory()?)?);
    }
    paths
        .iter()
        .map(|path| {
            if !path.exists() {
                bail!("{} does not exist", path.display());
            }
            Ok(FsItem::new(path.clone())?)
        })
        .collect()
}

fn check_scope(target: Target, kinds: &[ItemKind]) -> Result<()> {
    if !target.in_scope(kinds) {
        bail!(
            "The selection contains items that cannot be renamed from the {}",
            match target {
                Target::MediaPanel => "media panel",
                Target::Timeline => "timeline",
            }
        );
    }
    Ok(())
}

/// Builds the selection and hands a started session to `run`
///
/// Manifest items are written back afterwards when `run` reports that
/// names may have changed.
fn with_session<F>(environment: Environment, context: &mut WorkflowContext, run: F) -> Result<()>
where
    F: FnOnce(&mut RenameSession<'_>, &mut WorkflowContext) -> Result<bool>,
{
    let Environment {
        mode,
        context: run_context,
        store,
        target,
    } = environment;

    match context.options.manifest.clone() {
        Some(path) => {
            let mut manifest = Manifest::load(&path)?;
            check_scope(target, &manifest.kinds())?;
            let changed = {
                let selection = Selection::new(
                    manifest
                        .items
                        .iter_mut()
                        .map(|item| item as &mut dyn RenameTarget)
                        .collect(),
                );
                let mut session = target.start(selection, &run_context, store, mode)?;
                run(&mut session, context)?
            };
            if changed {
                save_manifest(&manifest, &path)?;
            }
        }
        None => {
            let mut items = collect_fs_items(&context.options.paths)?;
            let kinds: Vec<_> = items.iter().map(|item| item.kind()).collect();
            check_scope(target, &kinds)?;
            let selection = Selection::new(
                items
                    .iter_mut()
                    .map(|item| item as &mut dyn RenameTarget)
                    .collect(),
            );
            let mut session = target.start(selection, &run_context, store, mode)?;
            run(&mut session, context)?;
        }
    }
    Ok(())
}

fn save_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    manifest.save(path)?;
    info!("Updated manifest {}", path.display());
    Ok(())
}

fn rename(
    environment: Environment,
    context: &mut WorkflowContext,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    with_session(environment, context, |session, context| {
        let options = context.options.clone();
        if let Some(name) = &options.preset
            && !session.select_preset(name)?
        {
            bail!("No preset named {name}");
        }
        if let Some(find) = &options.find {
            session.set_find(find)?;
        }
        if let Some(replace) = &options.replace {
            session.set_replace(replace)?;
        }

        context.stats.items_selected = session.names().len();
        for (from, to) in session.preview() {
            context.add_planned_rename(&from, &to);
        }
        print_preview(context);

        if context.stats.items_selected == 0 {
            info!("Nothing selected");
        }
        if session.find().is_empty() {
            warn!("Find is empty, no name will change");
        }

        if options.dry_run {
            session.cancel()?;
            context.state = Some(session.state());
            println!("\nRun without --dry flag to rename these items.");
            return Ok(false);
        }

        let question = format!("Rename {} item(s)?", context.pending_changes());
        if !prompter.confirm("Find and Replace", &question) {
            session.cancel()?;
            context.state = Some(session.state());
            return Ok(false);
        }

        let report = session.confirm(&mut LogHost)?;
        context.record_report(&report);
        context.state = Some(session.state());
        Ok(report.renamed() > 0)
    })
}

fn print_preview(context: &WorkflowContext) {
    if context.planned_renames.is_empty() {
        return;
    }
    println!("\nPlanned renames:");
    println!("================");
    for planned in &context.planned_renames {
        if planned.changes() {
            let colored = planned.to.green().to_string();
            println!(
                "  {} -> {}",
                planned.from,
                format_message(&planned.to, &colored)
            );
        } else {
            let colored = "(unchanged)".dimmed().to_string();
            println!(
                "  {} {}",
                planned.from,
                format_message("(unchanged)", &colored)
            );
        }
    }
    println!(
        "\n  Items to be renamed: {} of {}",
        context.pending_changes(),
        context.planned_renames.len()
    );
}

fn list_presets(store: &PresetStore) {
    if store.presets().is_empty() {
        info!("No presets saved in {}", store.path().display());
        return;
    }
    println!("Presets in {}:", store.path().display());
    for preset in store.presets() {
        let colored = preset.name.bold().to_string();
        println!(
            "  {}: find '{}' replace '{}'",
            format_message(&preset.name, &colored),
            preset.find,
            preset.replace
        );
    }
}

/// Opens a session over nothing, for preset management
fn with_empty_session<F>(
    environment: Environment,
    context: &mut WorkflowContext,
    run: F,
) -> Result<()>
where
    F: FnOnce(&mut RenameSession<'_>, &mut WorkflowContext) -> Result<()>,
{
    let Environment {
        mode,
        context: run_context,
        store,
        target,
    } = environment;

    let mut session = target.start(Selection::new(Vec::new()), &run_context, store, mode)?;
    run(&mut session, context)
}

fn save_preset(
    environment: Environment,
    context: &mut WorkflowContext,
    prompter: &mut dyn Prompter,
    name: &str,
    find: &str,
    replace: &str,
) -> Result<()> {
    with_empty_session(environment, context, |session, context| {
        session.set_find(find)?;
        session.set_replace(replace)?;

        let mut named = NamedPrompter {
            name: Some(name.to_string()),
            inner: prompter,
        };
        let outcome = session.save_preset(&mut named)?;
        context.state = Some(session.state());

        match outcome {
            SaveOutcome::Added { persisted, .. } | SaveOutcome::Overwritten { persisted, .. }
                if !persisted =>
            {
                bail!("Preset {name} could not be written to {}", session.store().path().display())
            }
            SaveOutcome::Added { .. } | SaveOutcome::Overwritten { .. } => Ok(()),
            SaveOutcome::Declined { name } => {
                info!("Preset {name} left unchanged");
                Ok(())
            }
            SaveOutcome::Cancelled => Ok(()),
        }
    })
}

fn delete_preset(
    environment: Environment,
    context: &mut WorkflowContext,
    prompter: &mut dyn Prompter,
    name: &str,
) -> Result<()> {
    with_empty_session(environment, context, |session, context| {
        if !session.select_preset(name)? {
            bail!("No preset named {name}");
        }
        let outcome = session.delete_preset(prompter)?;
        context.state = Some(session.state());

        match outcome {
            DeleteOutcome::Deleted {
                persisted: false, ..
            } => bail!(
                "Preset {name} could not be deleted from {}",
                session.store().path().display()
            ),
            DeleteOutcome::Deleted { .. } | DeleteOutcome::NothingSelected => Ok(()),
            DeleteOutcome::Declined { name } => {
                info!("Preset {name} kept");
                Ok(())
            }
        }
    })
}

fn list_tokens(environment: Environment, context: &mut WorkflowContext) -> Result<()> {
    with_session(environment, context, |session, context| {
        println!("Tokens:");
        for token in session.available_tokens() {
            println!(
                "  {:<14} {:<16} {}",
                token.display_name,
                token.placeholder,
                token.value.as_deref().unwrap_or("")
            );
        }
        println!("\nWildcards:");
        for (name, symbol) in session.wildcards() {
            println!("  {name:<14} {symbol}");
        }
        context.state = Some(session.state());
        Ok(false)
    })
}

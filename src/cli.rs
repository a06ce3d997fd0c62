use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::constants::{
    ANY_SEQUENCE_HELP, CONFIG_HELP, DRY_RUN_HELP, FIND_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, MANIFEST_HELP, PRESET_HELP, REPLACE_HELP, TIMELINE_HELP,
    VERBOSE_HELP, YES_HELP,
};
use crate::errors::{Result, generic_error, persistence_error};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;
use crate::workflow::{Action, RunOptions};

fn find_arg() -> Arg {
    Arg::new("find").short('f').long("find").help(FIND_HELP)
}

fn replace_arg() -> Arg {
    Arg::new("replace")
        .short('r')
        .long("replace")
        .help(REPLACE_HELP)
}

fn paths_arg() -> Arg {
    Arg::new("paths")
        .help("Files and directories to rename (defaults to the current directory's entries)")
        .num_args(0..)
        .value_parser(clap::value_parser!(PathBuf))
}

/// Builds the command-line definition
///
/// Defines the following arguments:
/// - `find`, `replace`, `preset`: the fields of the rename
/// - `manifest`, `timeline`, `any-sequence`: what is renamed and how
/// - `dry`, `yes`: preview only, or skip confirmations
/// - `config`, `verbose`, `log-file`, `log-locally`: ambient settings
///
/// and the `presets` and `tokens` subcommands.
pub fn build_command() -> Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .global(true)
        .value_parser(clap::value_parser!(PathBuf));

    let arg_preset = Arg::new("preset").short('p').long("preset").help(PRESET_HELP);

    let arg_manifest = Arg::new("manifest")
        .short('m')
        .long("manifest")
        .help(MANIFEST_HELP)
        .global(true)
        .value_parser(clap::value_parser!(PathBuf));

    let arg_timeline = Arg::new("timeline")
        .short('t')
        .long("timeline")
        .help(TIMELINE_HELP)
        .global(true)
        .action(ArgAction::SetTrue);

    let arg_any_sequence = Arg::new("any_sequence")
        .long("any-sequence")
        .help(ANY_SEQUENCE_HELP)
        .global(true)
        .action(ArgAction::SetTrue);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_yes = Arg::new("yes")
        .short('y')
        .long("yes")
        .help(YES_HELP)
        .global(true)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .global(true)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .global(true)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .global(true)
        .action(ArgAction::SetTrue);

    let presets = Command::new("presets")
        .about("Manage saved find and replace presets")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List saved presets"))
        .subcommand(
            Command::new("save")
                .about("Save a find and replace pair as a preset")
                .arg(Arg::new("name").required(true))
                .arg(find_arg())
                .arg(replace_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a preset")
                .arg(Arg::new("name").required(true)),
        );

    let tokens = Command::new("tokens")
        .about("List the tokens and wildcards available for a selection")
        .arg(paths_arg());

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(find_arg())
        .arg(replace_arg())
        .arg(arg_preset)
        .arg(arg_manifest)
        .arg(arg_timeline)
        .arg(arg_any_sequence)
        .arg(arg_dry)
        .arg(arg_yes)
        .arg(arg_config)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .arg(paths_arg())
        .subcommand(presets)
        .subcommand(tokens)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
///
/// # Examples
/// ```
/// # use namesmith::cli::{build_command, get_verbosity};
/// # use namesmith::logging::LogLevel;
/// let matches = build_command().get_matches_from(["namesmith", "-v"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Debug);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Resolves the log file path
///
/// An empty name disables file logging. Unless logging locally, the file
/// lives in the per-user configuration directory, which is created if needed.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() || matches.get_flag("log_locally") {
        return Ok(filename);
    }

    let folder = find_project_folder()?;
    let config_dir = folder.config_dir();
    if !config_dir.exists() {
        create_dir_all(config_dir)
            .map_err(|e| persistence_error(e, config_dir.to_path_buf(), "create directory"))?;
    }
    let path = config_dir.join(filename);
    let path_str = path
        .to_str()
        .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {path:?}")))?;
    Ok(path_str.to_string())
}

/// Whether every confirmation should be answered with yes
pub fn get_assume_yes(matches: &ArgMatches) -> bool {
    matches.get_flag("yes")
}

/// Determines which action the arguments ask for
pub fn get_action(matches: &ArgMatches) -> Action {
    match matches.subcommand() {
        Some(("presets", presets)) => match presets.subcommand() {
            Some(("save", save)) => Action::SavePreset {
                name: string_arg(save, "name").unwrap_or_default(),
                find: string_arg(save, "find").unwrap_or_default(),
                replace: string_arg(save, "replace").unwrap_or_default(),
            },
            Some(("delete", delete)) => Action::DeletePreset {
                name: string_arg(delete, "name").unwrap_or_default(),
            },
            _ => Action::ListPresets,
        },
        Some(("tokens", _)) => Action::ListTokens,
        _ => Action::Rename,
    }
}

/// Collects the options shared by every action
pub fn get_run_options(matches: &ArgMatches) -> RunOptions {
    let paths_source = match matches.subcommand() {
        Some(("tokens", tokens)) => tokens,
        _ => matches,
    };

    RunOptions {
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        find: string_arg(matches, "find"),
        replace: string_arg(matches, "replace"),
        preset: string_arg(matches, "preset"),
        manifest: matches.get_one::<PathBuf>("manifest").cloned(),
        paths: paths_source
            .get_many::<PathBuf>("paths")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default(),
        timeline: matches.get_flag("timeline"),
        any_sequence: matches.get_flag("any_sequence"),
        dry_run: matches.get_flag("dry"),
    }
}

fn string_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Title of the tool, also stored as the script identity in the preset file
pub const TITLE: &str = "Find and Replace in Name Advance";

/// Version string stored in the preset file
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "find-and-replace-in-name-advance";

/// File name of the preset store inside the configuration directory
pub const PRESET_FILE_NAME: &str = "find_replace_in_name_advance.yaml";

/// Default name of the application configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default log file name
pub const LOG_FILE_DEFAULT: &str = "namesmith.log";

/// Characters the host refuses in names; each is replaced with an underscore
pub const ILLEGAL_NAME_CHARACTERS: &[char] = &['`', '|', '/', '\\', '+', '*', '\'', ';'];

/// Wildcard legend shown next to the find field
pub const WILDCARDS: &[(&str, &str)] = &[
    ("Match All", "*"),
    ("Match Any", "?"),
    ("Match Start", "^"),
    ("Match End", "$"),
];

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Preview the new names without renaming anything";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file to the current directory";

/// Help text for the find command-line option
pub const FIND_HELP: &str = "Find pattern (wildcards: * ? ^ $)";

/// Help text for the replace command-line option
pub const REPLACE_HELP: &str = "Replace template, may contain tokens such as <YYYY> or <user>";

/// Help text for the preset command-line option
pub const PRESET_HELP: &str = "Start from a saved preset";

/// Help text for the manifest command-line option
pub const MANIFEST_HELP: &str = "Rename the items listed in a YAML manifest instead of files";

/// Help text for the timeline command-line option
pub const TIMELINE_HELP: &str = "Treat the selection as a timeline (transitions are skipped)";

/// Help text for the any-sequence command-line option
pub const ANY_SEQUENCE_HELP: &str = "Treat * as 'any sequence of characters'";

/// Help text for the yes command-line option
pub const YES_HELP: &str = "Answer yes to every confirmation";

use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for namesmith
#[derive(Debug)]
pub enum Error {
    /// A value the user supplied is not acceptable (e.g. an empty preset name)
    Validation { field: String, detail: String },
    /// The preset store or another file could not be read, parsed or written
    Persistence {
        source: Box<dyn StdError + Send + Sync>,
        path: PathBuf,
        operation: String,
    },
    /// The host refused to rename a specific item
    Mutation { item: String, detail: String },
    /// A find string could not be turned into a regular expression
    PatternCompile { source: RegexError, pattern: String },
    /// The rename session already reached a terminal state
    SessionClosed { state: String },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation { field, detail } => {
                write!(f, "Invalid {field}: {detail}")
            }
            Error::Persistence {
                source,
                path,
                operation,
            } => {
                write!(f, "Failed to {} {}: {}", operation, path.display(), source)
            }
            Error::Mutation { item, detail } => {
                write!(f, "Could not rename '{item}': {detail}")
            }
            Error::PatternCompile { pattern, .. } => {
                write!(f, "Invalid find pattern: {pattern}")
            }
            Error::SessionClosed { state } => {
                write!(f, "Rename session is already {state}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Persistence { source, .. } => Some(source.as_ref()),
            Error::PatternCompile { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Persistence {
            source: Box::new(err),
            path: PathBuf::new(),
            operation: "access".to_string(),
        }
    }
}

impl From<RegexError> for Error {
    fn from(err: RegexError) -> Self {
        Error::PatternCompile {
            source: err,
            pattern: String::new(),
        }
    }
}

/// Custom Result type for namesmith
///
/// # Examples
/// ```
/// use namesmith::prelude::{Result, validation_error};
///
/// fn check_name(name: &str) -> Result<&str> {
///     if name.is_empty() {
///         return Err(validation_error("preset name", "must not be empty"));
///     }
///     Ok(name)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a validation error
pub fn validation_error(field: &str, detail: &str) -> Error {
    Error::Validation {
        field: field.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a persistence error
pub fn persistence_error<E: StdError + Send + Sync + 'static>(
    err: E,
    path: PathBuf,
    operation: &str,
) -> Error {
    Error::Persistence {
        source: Box::new(err),
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a mutation error
pub fn mutation_error(item: &str, detail: &str) -> Error {
    Error::Mutation {
        item: item.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a pattern compile error
pub fn pattern_compile_error(err: RegexError, pattern: &str) -> Error {
    Error::PatternCompile {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a session closed error
pub fn session_closed_error(state: &str) -> Error {
    Error::SessionClosed {
        state: state.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = validation_error("preset name", "must not be empty");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("preset name"),
            "Error message should contain the field"
        );
        assert!(
            error_string.contains("must not be empty"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_persistence_error() {
        let path = PathBuf::from("/test/presets.yaml");
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = persistence_error(io_error, path, "write");

        let error_string = format!("{error}");
        assert!(error_string.contains("write"));
        assert!(
            error_string.contains("/test/presets.yaml"),
            "Error message should name the failing path"
        );
        assert!(
            error_string.ends_with(": denied"),
            "Error message should carry the underlying cause"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_mutation_error() {
        let error = mutation_error("shot010", "item is locked");

        let error_string = format!("{error}");
        assert!(error_string.contains("shot010"));
        assert!(error_string.contains("item is locked"));
    }

    #[test]
    fn test_pattern_compile_error() {
        let regex_error = RegexError::Syntax("bad".to_string());
        let error = pattern_compile_error(regex_error, "a?c");

        assert!(format!("{error}").contains("a?c"));
    }

    #[test]
    fn test_session_closed_error() {
        let error = session_closed_error("confirmed");
        assert_eq!(format!("{error}"), "Rename session is already confirmed");
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");
        assert!(format!("{error}").contains("Something went wrong"));
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        assert!(
            format!("{error}").contains("Failed to access"),
            "Converted io errors should read as persistence failures"
        );

        let regex_error = RegexError::Syntax("Invalid regex syntax".to_string());
        let error: Error = regex_error.into();
        assert!(format!("{error}").contains("Invalid find pattern"));
    }
}

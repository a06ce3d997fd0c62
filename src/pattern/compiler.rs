//! Wildcard compilation
//!
//! The find grammar knows four symbols: `^` and `$` anchor to the start and
//! end of a name, `?` is exactly one character and `*` matches everything.
//! Any other character is an escaped literal. Pieces are concatenated in
//! source order and nothing is normalized between them.

use log::debug;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, pattern_compile_error};

/// How `*` is compiled
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WildcardMode {
    /// `*` becomes the alternation `^$|.+`, spliced into its neighbours as is.
    /// Mixing `*` with other pieces therefore alternates the whole expression.
    #[default]
    Legacy,
    /// `*` becomes `.*`, any sequence of characters between its neighbours
    AnySequence,
}

/// Converts a wildcard find string into regular expression source
///
/// # Examples
/// ```
/// use namesmith::pattern::{wildcards_to_regex, WildcardMode};
///
/// assert_eq!(wildcards_to_regex("^a?c", WildcardMode::Legacy), "^a.c");
/// assert_eq!(wildcards_to_regex("*", WildcardMode::Legacy), "^$|.+");
/// assert_eq!(wildcards_to_regex("a.b", WildcardMode::Legacy), r"a\.b");
/// ```
pub fn wildcards_to_regex(find: &str, mode: WildcardMode) -> String {
    let mut regex = String::with_capacity(find.len() * 2);
    let mut literal = String::new();

    for character in find.chars() {
        let piece = match character {
            '^' => "^",
            '$' => "$",
            '?' => ".",
            '*' => match mode {
                WildcardMode::Legacy => "^$|.+",
                WildcardMode::AnySequence => ".*",
            },
            other => {
                literal.push(other);
                continue;
            }
        };
        regex.push_str(&regex::escape(&literal));
        literal.clear();
        regex.push_str(piece);
    }
    regex.push_str(&regex::escape(&literal));

    regex
}

/// A find string compiled for substitution
///
/// An empty find string compiles to no expression at all, and applying it
/// leaves every name untouched.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    find: String,
    regex: Option<Regex>,
}

impl CompiledPattern {
    /// Compiles a find string
    ///
    /// # Errors
    /// Returns a pattern compile error if the generated expression is rejected
    /// by the regex engine.
    pub fn compile(find: &str, mode: WildcardMode) -> Result<Self> {
        if find.is_empty() {
            return Ok(CompiledPattern::empty());
        }

        let source = wildcards_to_regex(find, mode);
        let regex = Regex::new(&source).map_err(|e| pattern_compile_error(e, find))?;
        debug!("Compiled find '{find}' to '{source}'");

        Ok(CompiledPattern {
            find: find.to_string(),
            regex: Some(regex),
        })
    }

    /// A pattern that substitutes nothing
    pub fn empty() -> Self {
        CompiledPattern {
            find: String::new(),
            regex: None,
        }
    }

    /// The find string this pattern was compiled from
    pub fn find(&self) -> &str {
        &self.find
    }

    /// The generated expression, empty when there is none
    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map_or("", |regex| regex.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Replaces every match in `name` with `replacement`
    ///
    /// The replacement is inserted literally; `$1` or `${name}` in it are
    /// plain text.
    pub fn apply(&self, name: &str, replacement: &str) -> String {
        match &self.regex {
            Some(regex) => regex.replace_all(name, NoExpand(replacement)).into_owned(),
            None => name.to_string(),
        }
    }
}

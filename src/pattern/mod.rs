//! Pattern module
//!
//! This module contains the compiler that turns wildcard find strings into
//! regular expressions used for substitution.

mod compiler;

pub use compiler::{CompiledPattern, WildcardMode, wildcards_to_regex};

//! Token module
//!
//! This module contains the placeholders a replace template may use, the
//! per-kind contextual lookups, and the resolver that turns a template into
//! one literal replacement per item.

mod context;
mod resolver;
mod sanitize;
mod token;

pub use context::ContextTokens;
pub use resolver::{RunContext, TokenResolver, generic_tokens};
pub use sanitize::sanitize_replace;
pub use token::{Token, merge_tokens};

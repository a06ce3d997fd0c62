//! Contextual tokens
//!
//! Each variant is one kind-specific lookup derived from an item's context
//! value. The variant in use is chosen by the run's target.

use log::debug;

use crate::item::RenameTarget;

use super::token::Token;

/// Kind-specific token lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextTokens {
    /// No contextual tokens
    None,
    /// `<colour space>` from the item's colour space
    ColourSpace,
    /// `<shot name>` from the item's shot name
    ShotName,
}

impl ContextTokens {
    /// Computes this lookup's tokens for one item
    ///
    /// A failed lookup logs and yields an empty value instead of an error.
    pub fn lookup(&self, item: &dyn RenameTarget) -> Vec<Token> {
        let (display_name, placeholder) = match self {
            ContextTokens::None => return Vec::new(),
            ContextTokens::ColourSpace => ("Colour Space", "<colour space>"),
            ContextTokens::ShotName => ("Shot Name", "<shot name>"),
        };

        let value = match item.context_value() {
            Ok(value) => value,
            Err(e) => {
                debug!("No {display_name} for '{}': {e}", item.name());
                None
            }
        };

        vec![Token::new(display_name, placeholder, value)]
    }
}

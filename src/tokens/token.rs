use serde::Serialize;

/// A named placeholder and the value it resolves to
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Label shown to the user, e.g. "Year (YYYY)"
    pub display_name: String,
    /// Text searched for in the template, e.g. `<YYYY>`
    pub placeholder: String,
    /// Resolved value; `None` resolves to an empty string
    pub value: Option<String>,
}

impl Token {
    pub fn new(display_name: &str, placeholder: &str, value: Option<String>) -> Self {
        Token {
            display_name: display_name.to_string(),
            placeholder: placeholder.to_string(),
            value,
        }
    }

    /// Substitutes every occurrence of the placeholder in `template`
    pub fn apply(&self, template: &str) -> String {
        template.replace(&self.placeholder, self.value.as_deref().unwrap_or(""))
    }
}

/// Merges two pools keyed on display name
///
/// Entries of `overrides` replace same-named entries of `base` in place;
/// new names are appended in their own order.
pub fn merge_tokens(base: &[Token], overrides: &[Token]) -> Vec<Token> {
    let mut merged = base.to_vec();
    for token in overrides {
        match merged
            .iter_mut()
            .find(|existing| existing.display_name == token.display_name)
        {
            Some(existing) => *existing = token.clone(),
            None => merged.push(token.clone()),
        }
    }
    merged
}

//! Token resolution
//!
//! This module builds the generic and contextual token pools for a run and
//! resolves replace templates against them.

use chrono::{Local, NaiveDateTime};

use crate::item::Selection;

use super::context::ContextTokens;
use super::token::{Token, merge_tokens};

/// Ambient values of one run, captured once at start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Wall-clock time the run started
    pub now: NaiveDateTime,
    /// Current project name
    pub project: String,
    /// Current user name
    pub user: String,
}

impl RunContext {
    pub fn new(now: NaiveDateTime, project: &str, user: &str) -> Self {
        RunContext {
            now,
            project: project.to_string(),
            user: user.to_string(),
        }
    }

    /// Captures the local time and fills missing names from the environment
    ///
    /// The project defaults to the current directory's name and the user to
    /// `USER` (or `USERNAME`).
    pub fn from_environment(project: Option<String>, user: Option<String>) -> Self {
        let project = project.unwrap_or_else(|| {
            std::env::current_dir()
                .ok()
                .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().to_string()))
                .unwrap_or_default()
        });
        let user = user
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .unwrap_or_default();

        RunContext {
            now: Local::now().naive_local(),
            project,
            user,
        }
    }
}

/// Tokens shared by every item of a run
pub fn generic_tokens(context: &RunContext) -> Vec<Token> {
    let now = &context.now;
    let field = |fmt: &str| Some(now.format(fmt).to_string());

    vec![
        Token::new("am/pm", "<pp>", Some(now.format("%p").to_string().to_lowercase())),
        Token::new("AM/PM", "<PP>", Some(now.format("%p").to_string().to_uppercase())),
        Token::new("Day", "<DD>", field("%d")),
        Token::new("Hour (12hr)", "<hh>", field("%I")),
        Token::new("Hour (24hr)", "<HH>", field("%H")),
        Token::new("Minute", "<mm>", field("%M")),
        Token::new("Month", "<MM>", field("%m")),
        Token::new("Project", "<project>", Some(context.project.clone())),
        Token::new("User", "<user>", Some(context.user.clone())),
        Token::new("Year (YYYY)", "<YYYY>", field("%Y")),
        Token::new("Year (YY)", "<YY>", field("%y")),
    ]
}

/// Resolves replace templates for every item of a selection
///
/// Contextual pools are computed once, in selection order, when the
/// resolver is built.
#[derive(Debug, Clone)]
pub struct TokenResolver {
    generic: Vec<Token>,
    contextual: Vec<Vec<Token>>,
}

impl TokenResolver {
    pub fn new(context: &RunContext, selection: &Selection<'_>, lookup: ContextTokens) -> Self {
        TokenResolver {
            generic: generic_tokens(context),
            contextual: selection.items().map(|item| lookup.lookup(item)).collect(),
        }
    }

    pub fn generic(&self) -> &[Token] {
        &self.generic
    }

    /// Contextual tokens of the item at `index`, empty when out of range
    pub fn contextual(&self, index: usize) -> &[Token] {
        self.contextual
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of items the resolver was built for
    pub fn len(&self) -> usize {
        self.contextual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contextual.is_empty()
    }

    /// Generic pool merged with one item's contextual pool
    pub fn merged(&self, index: usize) -> Vec<Token> {
        merge_tokens(&self.generic, self.contextual(index))
    }

    /// Tokens to present to the user
    ///
    /// Only the first item's contextual tokens are included, so a mixed
    /// selection shows what the first item offers.
    pub fn available_tokens(&self) -> Vec<Token> {
        self.merged(0)
    }

    /// Resolves `template` for the item at `index`
    ///
    /// Unknown placeholders are left as typed.
    pub fn resolve_for_item(&self, index: usize, template: &str) -> String {
        self.merged(index)
            .iter()
            .fold(template.to_string(), |result, token| token.apply(&result))
    }

    /// Resolves `template` for every item in selection order
    pub fn resolve_all(&self, template: &str) -> Vec<String> {
        (0..self.len())
            .map(|index| self.resolve_for_item(index, template))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_context() -> RunContext {
        let now = NaiveDate::from_ymd_opt(2024, 2, 21)
            .unwrap()
            .and_hms_opt(15, 7, 0)
            .unwrap();
        RunContext::new(now, "show_x", "kieran")
    }

    #[test]
    fn test_generic_tokens_values() {
        let tokens = generic_tokens(&fixed_context());
        let value = |placeholder: &str| {
            tokens
                .iter()
                .find(|token| token.placeholder == placeholder)
                .and_then(|token| token.value.clone())
                .unwrap()
        };

        assert_eq!(tokens.len(), 11);
        assert_eq!(value("<pp>"), "pm");
        assert_eq!(value("<PP>"), "PM");
        assert_eq!(value("<DD>"), "21");
        assert_eq!(value("<hh>"), "03");
        assert_eq!(value("<HH>"), "15");
        assert_eq!(value("<mm>"), "07");
        assert_eq!(value("<MM>"), "02");
        assert_eq!(value("<project>"), "show_x");
        assert_eq!(value("<user>"), "kieran");
        assert_eq!(value("<YYYY>"), "2024");
        assert_eq!(value("<YY>"), "24");
    }

    #[test]
    fn test_from_environment_keeps_explicit_values() {
        let context = RunContext::from_environment(Some("proj".into()), Some("me".into()));
        assert_eq!(context.project, "proj");
        assert_eq!(context.user, "me");
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::ILLEGAL_NAME_CHARACTERS;

/// Replaces characters the host refuses in names with an underscore
///
/// Only this fixed set is touched: `` ` | / \ + * ' ; ``.
pub fn sanitize_replace(replace: &str) -> String {
    static ILLEGAL_RE: Lazy<Regex> = Lazy::new(|| {
        let class: String = ILLEGAL_NAME_CHARACTERS
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Regex::new(&format!("[{class}]"))
            .expect("Failed to compile regex pattern for sanitize_replace")
    });
    ILLEGAL_RE.replace_all(replace, "_").into_owned()
}

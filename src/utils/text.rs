//! Text checks applied to validation messages.

use regex::Regex;
use std::sync::LazyLock;

static QUOTED_STRING: LazyLock<Regex> = LazyLock::new(|| {
    // Non-greedy so `"a" and "b"` yields two matches
    Regex::new(r#""(.*?)""#).expect("quoted string pattern is valid")
});

/// Reports whether any double-quoted substring of `text` has leading or
/// trailing whitespace inside the quotes.
///
/// Validation messages quote the offending value, and a value like `"GB "` is
/// easy to miss when rendered, so the UI highlights it.
///
/// # Returns
///
/// - `Some(true)` if at least one quoted substring differs from its trimmed form
/// - `Some(false)` if there are quoted substrings and all are trimmed
/// - `None` if `text` contains no quoted substring (the check does not apply)
pub fn contains_quoted_trailing_whitespace(text: &str) -> Option<bool> {
    let mut quoted = QUOTED_STRING
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .peekable();

    quoted.peek()?;
    Some(quoted.any(|s| trim_padding(s) != s))
}

/// Trims whitespace and U+FEFF.
fn trim_padding(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

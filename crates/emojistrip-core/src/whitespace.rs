// Whitespace cleanup after symbol removal
//
// Emoji are usually written with spaces on both sides, so deleting them
// leaves runs like "word   word" or "word  \nword". Only spaces that sit
// right before another space or a newline are collapsed; tabs, carriage
// returns and single interior spaces are left as they are.

use std::sync::LazyLock;

use regex::Regex;

/// One or more spaces followed by a single space or newline. The trailing
/// character is captured and kept.
static REPEATED_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+(?P<ws> |\n)").expect("valid regex"));

/// Collapse each run of spaces that precedes a space or newline down to that
/// trailing character.
///
/// ```
/// use emojistrip_core::whitespace::collapse_repeated_spaces;
///
/// assert_eq!(collapse_repeated_spaces("a   b"), "a b");
/// assert_eq!(collapse_repeated_spaces("a  \nb"), "a\nb");
/// assert_eq!(collapse_repeated_spaces("a\t\tb"), "a\t\tb");
/// ```
pub fn collapse_repeated_spaces(text: &str) -> String {
    REPEATED_SPACES.replace_all(text, "${ws}").into_owned()
}

/// Whitespace trimmed from the edges: Unicode `White_Space` plus the C0
/// separators U+001C..=U+001F.
fn is_edge_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Collapse repeated spaces, then trim leading and trailing whitespace.
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = REPEATED_SPACES.replace_all(text, "${ws}");
    collapsed.trim_matches(is_edge_whitespace).to_string()
}

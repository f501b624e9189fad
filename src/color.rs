use std::sync::LazyLock;

use regex::Regex;

// Inline color directives look like `^red;` or `^reset;`: caret, word
// characters, semicolon. Cosmetic only, stripped for plain-text display.
static COLOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^\w+?;").expect("valid regex"));

pub fn strip_colors(input: &str) -> String {
    COLOR_TAG.replace_all(input, "").into_owned()
}

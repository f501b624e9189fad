use std::sync::LazyLock;

use regex::Regex;

use crate::color::strip_colors;

// Orbital designators: a run of V/I numerals plus an optional sector tag,
// e.g. "IV" or "II - b". Numerals containing X, L, C, D or M are not
// recognized and pass through untouched.
static PLANET_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([VI]+)( - [a-z])?").expect("valid regex"));
static WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w").expect("valid regex"));

pub fn strip_planet_suffix(input: &str) -> String {
    let plain = strip_colors(input);
    let mut out = String::with_capacity(plain.len());
    let mut last = 0;
    for caps in PLANET_SUFFIX.captures_iter(&plain) {
        let (Some(whole), Some(numeral)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // A numeral run that continues into another word character is part
        // of a name ("Vice", "Ixion"), not a designator.
        if WORD_CHAR.is_match(&plain[numeral.end()..]) {
            continue;
        }
        out.push_str(&plain[last..whole.start()]);
        last = whole.end();
    }
    out.push_str(&plain[last..]);
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_trailing_numeral() {
        assert_eq!(strip_planet_suffix("Alpha Centauri IV"), "Alpha Centauri");
        assert_eq!(strip_planet_suffix("Kepler V"), "Kepler");
    }

    #[test]
    fn removes_sector_tag() {
        assert_eq!(strip_planet_suffix("Beta Prime II - b"), "Beta Prime");
    }

    #[test]
    fn strips_colors_first() {
        assert_eq!(strip_planet_suffix("^red;Foo;Planet IV"), "Foo;Planet");
        assert_eq!(strip_planet_suffix("^green;Kepler V^reset;"), "Kepler");
    }

    #[test]
    fn numerals_inside_words_are_kept() {
        assert_eq!(strip_planet_suffix("Vice City"), "Vice City");
        assert_eq!(strip_planet_suffix("Ixion"), "Ixion");
    }

    #[test]
    fn extended_numerals_are_not_recognized() {
        assert_eq!(strip_planet_suffix("Planet X"), "Planet X");
        // Only the V/I tail of a longer numeral is matched.
        assert_eq!(strip_planet_suffix("Planet XIV"), "Planet X");
    }

    #[test]
    fn interior_numerals_are_removed_too() {
        assert_eq!(strip_planet_suffix("IV Planet IV"), "Planet");
    }

    #[test]
    fn plain_names_are_trimmed_only() {
        assert_eq!(strip_planet_suffix("  Garden World  "), "Garden World");
    }
}

//! Fixed word tables for Swedish numerals and vague quantities.

/// Swedish cardinals accepted where a digit would normally appear.
pub const SWEDISH_NUMBERS: &[(&str, u32)] = &[
    ("en", 1),
    ("ett", 1),
    ("två", 2),
    ("tre", 3),
    ("fyra", 4),
    ("fem", 5),
    ("sex", 6),
    ("sju", 7),
    ("åtta", 8),
    ("nio", 9),
    ("tio", 10),
];

/// Swedish idioms for "a few / several / a couple of" years.
pub const VAGUE_QUANTITIES: &[(&str, u32)] = &[("några", 1), ("flera", 2), ("ett par", 1)];

pub fn swedish_number(token: &str) -> Option<u32> {
    lookup(SWEDISH_NUMBERS, token)
}

pub fn vague_quantity(phrase: &str) -> Option<u32> {
    lookup(VAGUE_QUANTITIES, phrase)
}

/// Digits first, then the Swedish lexicon. Overflowing digit strings yield `None`.
pub fn parse_numeral(token: &str) -> Option<u32> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().ok();
    }
    swedish_number(token)
}

fn lookup(table: &[(&str, u32)], key: &str) -> Option<u32> {
    let norm = key.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    table.iter().find(|(word, _)| *word == norm).map(|(_, n)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(parse_numeral("3"), Some(3));
        assert_eq!(parse_numeral("007"), Some(7));
        assert_eq!(parse_numeral("0"), Some(0));
        assert_eq!(parse_numeral("99999999999"), None);
    }

    #[test]
    fn swedish_words() {
        assert_eq!(parse_numeral("tre"), Some(3));
        assert_eq!(parse_numeral("Åtta"), Some(8));
        assert_eq!(parse_numeral("TIO"), Some(10));
        assert_eq!(parse_numeral("elva"), None);
        assert_eq!(parse_numeral(""), None);
    }

    #[test]
    fn vague_phrases() {
        assert_eq!(vague_quantity("några"), Some(1));
        assert_eq!(vague_quantity("Flera"), Some(2));
        assert_eq!(vague_quantity("ett  par"), Some(1));
        assert_eq!(vague_quantity("många"), None);
    }
}

//! Display-width arithmetic that treats combining diacritics as zero width.

/// Combining diacritics that terminals render at zero width.
///
/// Toolbox aligns columns by byte count, so any of these marks in a word
/// shifts every following column one cell to the left. Width arithmetic in
/// this crate skips them.
pub const DIACRITICS: [char; 29] = [
    '\u{0301}', // acute
    '\u{0300}', // grave
    '\u{030b}', // double acute
    '\u{030f}', // double grave
    '\u{030a}', // ring above
    '\u{0325}', // ring below
    '\u{0303}', // tilde above
    '\u{0334}', // tilde across
    '\u{0330}', // tilde below
    '\u{0308}', // trema above
    '\u{0324}', // trema below
    '\u{0304}', // bar above
    '\u{032c}', // hacek below
    '\u{0339}', // rounded
    '\u{031c}', // unrounded
    '\u{031f}', // advanced
    '\u{0320}', // retracted
    '\u{0329}', // syllabic
    '\u{032f}', // non-syllabic
    '\u{033c}', // linguolabial
    '\u{031d}', // raised
    '\u{031e}', // lowered
    '\u{0318}', // ATR
    '\u{0319}', // RTR
    '\u{032a}', // dental
    '\u{033a}', // apical
    '\u{033b}', // laminal
    '\u{033d}', // mid-centralised
    '\u{031a}', // unreleased
];

/// Display length of `s`, not counting combining diacritics.
pub fn true_len(s: &str) -> usize {
    s.chars().filter(|c| !DIACRITICS.contains(c)).count()
}

/// Right-pad `s` with spaces up to a display length of `min_len`.
///
/// Never truncates and never touches the existing content.
pub fn true_fill(s: &str, min_len: usize) -> String {
    true_fill_with(s, min_len, ' ')
}

/// Right-pad `s` with `filler` up to a display length of `min_len`.
pub fn true_fill_with(s: &str, min_len: usize, filler: char) -> String {
    let tail_len = min_len.saturating_sub(true_len(s));
    let mut filled = String::with_capacity(s.len() + tail_len * filler.len_utf8());
    filled.push_str(s);
    for _ in 0..tail_len {
        filled.push(filler);
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_true_len_plain_ascii() {
        assert_eq!(true_len("Completely normal string"), 24);
    }

    #[test]
    fn test_true_len_skips_diacritics() {
        // "é" precomposed counts, "e" + combining acute counts once
        let s = "String with Diacritics: \u{e9} e\u{0301} \u{0268} \u{0268}\u{0301}";
        assert_eq!(true_len(s), 31);
        assert_eq!(true_len("e\u{0301}"), 1);
        assert_eq!(true_len("\u{0301}\u{0308}"), 0);
    }

    #[test]
    fn test_true_fill_ascii() {
        assert_eq!(true_fill_with("ASCII", 10, '!'), "ASCII!!!!!");
    }

    #[test]
    fn test_true_fill_counts_display_width() {
        // one combining mark, so one extra filler cell is needed
        assert_eq!(true_fill("dia\u{0308}critic", 15), "dia\u{0308}critic      ");
    }

    #[test]
    fn test_true_fill_never_truncates() {
        assert_eq!(true_fill("longer than asked", 3), "longer than asked");
        assert_eq!(true_fill("", 0), "");
    }

    proptest! {
        #[test]
        fn test_fill_starts_with_input(s in ".{0,40}", n in 0usize..80) {
            let filled = true_fill(&s, n);
            prop_assert!(filled.starts_with(&s));
        }

        #[test]
        fn test_fill_reaches_requested_width(s in ".{0,40}", n in 0usize..80) {
            let filled = true_fill(&s, n);
            prop_assert!(true_len(&filled) >= n);
            // appended part is filler only
            prop_assert!(filled[s.len()..].chars().all(|c| c == ' '));
        }
    }
}

//! Whitespace tokenizer and tier-marker recognition for Toolbox lines.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    sequence::pair,
    IResult,
};

/// Marker of the text tier (complete words).
pub const TEXT_MARKER: &str = "\\t";
/// Marker of the morpheme-segmentation tier.
pub const MORPHEME_MARKER: &str = "\\mb";
/// Marker of the free-gloss tier.
pub const GLOSS_MARKER: &str = "\\gl";
/// Marker of the part-of-speech tier.
pub const POS_MARKER: &str = "\\ps";

/// The four tier markers of a gloss block, in file order.
pub const TIER_MARKERS: [&str; 4] = [TEXT_MARKER, MORPHEME_MARKER, GLOSS_MARKER, POS_MARKER];

/// Split a line into whitespace-separated tokens.
///
/// The tier marker is not treated specially; it comes out as the first
/// token and is aligned as a column of its own.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut input = line;
    let mut tokens = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        let token_res: IResult<&str, &str> = take_while1(|c: char| !c.is_whitespace())(input);
        match token_res {
            Ok((next_input, token)) => {
                tokens.push(token);
                input = next_input;
            }
            Err(_) => break,
        }
    }

    tokens
}

/// True if `line` opens with `marker` followed by a literal space.
///
/// The match is exact and case-sensitive, so `\t x` matches `\t` while
/// `\this x` and `\t\tx` do not.
pub fn has_marker(line: &str, marker: &str) -> bool {
    let res: IResult<&str, (&str, char)> = pair(tag(marker), char(' '))(line);
    res.is_ok()
}

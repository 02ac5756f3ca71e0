//! A single 4-line interlinear gloss block and its column alignment.

use std::fmt;

use crate::morpheme::MorphemeMap;
use crate::token::tokenize;
use crate::width::{true_fill, true_len};
use crate::GlossError;

/// Alignment state of a gloss, fixed at construction.
///
/// A faulty gloss keeps no widths; it renders its lines untouched so that
/// nothing of the source text is lost.
#[derive(Debug, Clone)]
enum Shape {
    Aligned {
        map: MorphemeMap,
        morph_width: Vec<usize>,
        word_width: Vec<usize>,
    },
    Faulty {
        error: GlossError,
    },
}

/// One gloss block: a text line plus its annotation tiers.
///
/// Tier 0 is the morpheme segmentation; the remaining tiers (free gloss,
/// part of speech) follow in file order. Construction never fails: an
/// inconsistent block becomes a faulty gloss that renders verbatim and
/// reports its error through [`Gloss::error`].
#[derive(Debug, Clone)]
pub struct Gloss {
    text_line: String,
    tier_lines: Vec<String>,
    shape: Shape,
}

impl Gloss {
    pub fn new(text_line: String, tier_lines: Vec<String>) -> Self {
        let shape = match align(&text_line, &tier_lines) {
            Ok(shape) => shape,
            Err(error) => Shape::Faulty { error },
        };
        Self {
            text_line,
            tier_lines,
            shape,
        }
    }

    pub fn is_faulty(&self) -> bool {
        matches!(self.shape, Shape::Faulty { .. })
    }

    /// The construction error of a faulty gloss.
    pub fn error(&self) -> Option<&GlossError> {
        match &self.shape {
            Shape::Faulty { error } => Some(error),
            Shape::Aligned { .. } => None,
        }
    }

    /// The text line exactly as scanned.
    pub fn text_line(&self) -> &str {
        &self.text_line
    }

    /// The annotation tier lines exactly as scanned, in file order.
    pub fn tier_lines(&self) -> &[String] {
        &self.tier_lines
    }
}

/// Compute the morpheme map and both width tables for one block.
fn align(text_line: &str, tier_lines: &[String]) -> Result<Shape, GlossError> {
    let words = tokenize(text_line);
    let tiers: Vec<Vec<&str>> = tier_lines.iter().map(|line| tokenize(line)).collect();

    let morphemes = tiers.first().map(Vec::as_slice).unwrap_or(&[]);
    let map = MorphemeMap::build(&words, morphemes)?;

    if tiers.iter().any(|tier| tier.len() != morphemes.len()) {
        return Err(GlossError::MorphemeCountMismatch);
    }

    // widest token per morpheme column, across all tiers
    let morph_width: Vec<usize> = (0..morphemes.len())
        .map(|j| tiers.iter().map(|tier| true_len(tier[j])).max().unwrap_or(0))
        .collect();

    // a word column must hold the word itself and its space-joined morphemes
    let word_width: Vec<usize> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let column = map.morphemes_of(i);
            let seg_len: usize = column.iter().map(|&j| morph_width[j]).sum::<usize>()
                + column.len().saturating_sub(1);
            seg_len.max(true_len(word))
        })
        .collect();

    Ok(Shape::Aligned {
        map,
        morph_width,
        word_width,
    })
}

impl fmt::Display for Gloss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (map, morph_width, word_width) = match &self.shape {
            Shape::Faulty { .. } => {
                write!(f, "{}", self.text_line)?;
                for line in &self.tier_lines {
                    write!(f, "\n{line}")?;
                }
                return Ok(());
            }
            Shape::Aligned {
                map,
                morph_width,
                word_width,
            } => (map, morph_width, word_width),
        };

        let words = tokenize(&self.text_line);
        let filled: Vec<String> = words
            .iter()
            .zip(word_width)
            .map(|(word, &width)| true_fill(word, width))
            .collect();
        write!(f, "{}", filled.join(" ").trim_end())?;

        for line in &self.tier_lines {
            let morphemes = tokenize(line);
            let columns: Vec<String> = (0..words.len())
                .map(|i| {
                    let column: Vec<String> = map
                        .morphemes_of(i)
                        .into_iter()
                        .map(|j| true_fill(morphemes[j], morph_width[j]))
                        .collect();
                    true_fill(&column.join(" "), word_width[i])
                })
                .collect();
            write!(f, "\n{}", columns.join(" ").trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gloss(text: &str, tiers: &[&str]) -> Gloss {
        Gloss::new(text.to_string(), tiers.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_realigns_all_tiers() {
        let gloss = gloss(
            "\\t das blaue Haus",
            &[
                "\\mb das blau -e Haus",
                "\\gl the blue -N.SG house",
                "\\ps no a -ai n",
            ],
        );
        assert!(!gloss.is_faulty());
        assert_eq!(
            gloss.to_string(),
            "\\t  das blaue      Haus\n\
             \\mb das blau -e    Haus\n\
             \\gl the blue -N.SG house\n\
             \\ps no  a    -ai   n"
        );
    }

    #[test]
    fn test_diacritics_do_not_widen_columns() {
        let gloss = gloss(
            "\\t e\u{0301}to",
            &["\\mb e\u{0301}- to", "\\gl DEM- house"],
        );
        assert!(!gloss.is_faulty());
        let rendered = gloss.to_string();
        assert_eq!(
            rendered,
            "\\t  e\u{0301}to\n\\mb e\u{0301}-   to\n\\gl DEM- house"
        );
        // the last morpheme column starts at the same display cell on every
        // tier even though byte offsets differ
        let starts: Vec<usize> = rendered
            .lines()
            .skip(1)
            .map(|line| {
                let last = *tokenize(line).last().unwrap();
                true_len(&line[..line.rfind(last).unwrap()])
            })
            .collect();
        assert_eq!(starts, vec![9, 9]);
    }

    #[test]
    fn test_content_survives_realignment() {
        let gloss = gloss(
            "\\t das blaue Haus",
            &[
                "\\mb das blau -e Haus",
                "\\gl the blue -N.SG house",
                "\\ps no a -ai n",
            ],
        );
        let rendered = gloss.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(tokenize(lines[0]), tokenize("\\t das blaue Haus"));
        assert_eq!(tokenize(lines[2]), tokenize("\\gl the blue -N.SG house"));
    }

    #[test]
    fn test_map_failure_keeps_block_verbatim() {
        let gloss = gloss(
            "\\t das blaue    Haus",
            &[
                "\\mb das blau -e",
                "\\gl   the blue -N.SG house",
                "\\ps no a -ai n",
            ],
        );
        assert!(gloss.is_faulty());
        assert_eq!(gloss.error(), Some(&GlossError::WordsUnassigned));
        assert_eq!(
            gloss.to_string(),
            "\\t das blaue    Haus\n\
             \\mb das blau -e\n\
             \\gl   the blue -N.SG house\n\
             \\ps no a -ai n"
        );
    }

    #[test]
    fn test_tier_count_mismatch_keeps_block_verbatim() {
        let gloss = gloss(
            "\\t das Haus",
            &[
                "\\mb das Haus",
                "\\gl the house indeed",
                "\\ps no n",
            ],
        );
        assert!(gloss.is_faulty());
        assert_eq!(gloss.error(), Some(&GlossError::MorphemeCountMismatch));
        assert_eq!(
            gloss.to_string(),
            "\\t das Haus\n\\mb das Haus\n\\gl the house indeed\n\\ps no n"
        );
    }
}

//! Two-way index mapping between morphemes and the words they belong to.

use crate::GlossError;

/// Maps each morpheme token of a segmentation line to the index of its
/// owning word on the text line, and back.
///
/// Built once from the two tokenized lines; immutable afterwards. The
/// mapping is non-decreasing and covers every word index exactly when
/// construction succeeds.
///
/// Hyphens carry the Toolbox segmentation convention: a leading or trailing
/// `-` continues the current word, a standalone `-` marks a compound
/// boundary within one word. A literal hyphen in ordinary text is
/// indistinguishable from that markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeMap {
    mapping: Vec<usize>,
}

impl MorphemeMap {
    /// Assign every morpheme token to a word index.
    ///
    /// Scans the morpheme tokens left to right, opening a new word group
    /// whenever the previous group is closed and the next token does not
    /// continue it with a leading `-`.
    pub fn build(words: &[&str], morphemes: &[&str]) -> Result<Self, GlossError> {
        let mut word_index = 0usize;
        let mut word_open = false;
        let mut mapping = Vec::with_capacity(morphemes.len());

        for &morpheme in morphemes {
            // compound words are glossed "first - second" in Toolbox
            if morpheme == "-" {
                word_open = false;
            }
            if word_open && !morpheme.starts_with('-') {
                word_index += 1;
                word_open = false;
            }
            mapping.push(word_index);
            if !morpheme.ends_with('-') {
                word_open = true;
            }
        }

        if word_index + 1 < words.len() {
            return Err(GlossError::WordsUnassigned);
        }
        if word_index + 1 > words.len() {
            return Err(GlossError::MorphemesUnassigned);
        }
        Ok(Self { mapping })
    }

    /// Word index owning the morpheme at `index`, or `None` out of bounds.
    pub fn word_of(&self, index: usize) -> Option<usize> {
        self.mapping.get(index).copied()
    }

    /// All morpheme indices belonging to the word at `index`, ascending.
    pub fn morphemes_of(&self, index: usize) -> Vec<usize> {
        self.mapping
            .iter()
            .enumerate()
            .filter(|&(_, &word)| word == index)
            .map(|(morpheme, _)| morpheme)
            .collect()
    }

    /// Number of mapped morphemes.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

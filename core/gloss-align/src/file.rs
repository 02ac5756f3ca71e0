//! File-level scan that wraps gloss blocks into structured entries.

use std::fmt;

use crate::gloss::Gloss;
use crate::token::{has_marker, TIER_MARKERS};

/// One entry of a scanned file: either an untouched line or a gloss block.
#[derive(Debug, Clone)]
pub enum Entry {
    Raw(String),
    Gloss(Gloss),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Raw(line) => write!(f, "{line}"),
            Entry::Gloss(gloss) => write!(f, "{gloss}"),
        }
    }
}

/// An ordered sequence of raw lines and parsed gloss blocks.
///
/// The scan runs once, in the constructor. Four consecutive lines carrying
/// the `\t`, `\mb`, `\gl`, `\ps` markers become one [`Entry::Gloss`]; every
/// other line passes through as [`Entry::Raw`]. Entries can then be
/// queried, replaced or removed by position; mutation never re-runs the
/// scan.
#[derive(Debug, Clone, Default)]
pub struct GlossFile {
    entries: Vec<Entry>,
}

impl GlossFile {
    /// Scan `lines` into entries with a single forward pass.
    ///
    /// The read cursor only ever advances, so lines consumed into a gloss
    /// are never rescanned, and a partial block (fewer than 4 lines left,
    /// or a marker out of order) is passed through line by line.
    pub fn parse(lines: Vec<String>) -> Self {
        let mut entries = Vec::with_capacity(lines.len());
        let mut source = lines.into_iter();

        // FIFO window of up to 4 unconsumed lines
        let mut window: Vec<String> = Vec::with_capacity(4);
        loop {
            while window.len() < 4 {
                match source.next() {
                    Some(line) => window.push(line),
                    None => break,
                }
            }
            if window.is_empty() {
                break;
            }
            let is_block = window.len() == 4
                && window
                    .iter()
                    .zip(TIER_MARKERS)
                    .all(|(line, marker)| has_marker(line, marker));
            if is_block {
                let mut block = window.drain(..);
                let text_line = block.next().expect("window holds 4 lines");
                let tier_lines: Vec<String> = block.collect();
                entries.push(Entry::Gloss(Gloss::new(text_line, tier_lines)));
            } else {
                entries.push(Entry::Raw(window.remove(0)));
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Replace the entry at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, entry: Entry) -> Option<Entry> {
        let slot = self.entries.get_mut(index)?;
        Some(std::mem::replace(slot, entry))
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All gloss blocks, in file order. Callers filter for faulty ones
    /// when reporting diagnostics.
    pub fn glosses(&self) -> impl Iterator<Item = &Gloss> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Gloss(gloss) => Some(gloss),
            Entry::Raw(_) => None,
        })
    }
}

impl<'a> IntoIterator for &'a GlossFile {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for GlossFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index == 0 {
                write!(f, "{entry}")?;
            } else {
                write!(f, "\n{entry}")?;
            }
        }
        Ok(())
    }
}

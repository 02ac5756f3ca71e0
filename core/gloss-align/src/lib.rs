pub mod file;
pub mod gloss;
pub mod morpheme;
pub mod token;
pub mod width;

// Re-export the engine surface for convenience
pub use file::{Entry, GlossFile};
pub use gloss::Gloss;
pub use morpheme::MorphemeMap;
pub use width::{true_fill, true_fill_with, true_len, DIACRITICS};

use thiserror::Error;

/// Failure while interlinearising a single gloss block.
///
/// Both kinds are local to one block. A failed block is kept verbatim and
/// reported through [`Gloss::error`]; it never aborts scanning or rendering
/// of the rest of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GlossError {
    /// The morpheme tier closes its last word group before the text tier
    /// runs out of words.
    #[error("could not assign all words to morphemes")]
    WordsUnassigned,
    /// The morpheme tier opens more word groups than the text tier has
    /// words.
    #[error("could not assign all morphemes to a word")]
    MorphemesUnassigned,
    /// Annotation tiers within one block tokenize to differing counts.
    #[error("numbers of morphemes did not match between segmented lines")]
    MorphemeCountMismatch,
}

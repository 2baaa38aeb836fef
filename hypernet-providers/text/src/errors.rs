use std::fmt;

use hypernet_core::WordNetError;
use thiserror::Error;

/// Which record stream a failure came from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RecordKind {
    /// `id,noun noun ...,gloss` records.
    Synsets,
    /// `id,hypernym,hypernym ...` records.
    Hypernyms,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Synsets => "synsets",
            Self::Hypernyms => "hypernyms",
        })
    }
}

/// Errors raised while reading synset and hypernym records.
#[derive(Debug, Error)]
pub enum TextProviderError {
    /// The synset stream held no records.
    #[error("{kind} input contains no records")]
    EmptyInput {
        /// Stream that was empty.
        kind: RecordKind,
    },
    /// A line could not be parsed.
    #[error("{kind} line {line}: {reason}")]
    MalformedRecord {
        /// Stream containing the bad line.
        kind: RecordKind,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The parsed records did not form a valid noun graph.
    #[error(transparent)]
    Core(#[from] WordNetError),
    /// Reading from the underlying stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

//! Noun-level queries over the hypernym graph.
//!
//! [`WordNet`] pairs a [`TermIndex`] with a [`Sap`] engine. A noun that
//! belongs to several synsets contributes all of their ids as simultaneous
//! search sources, so distances are measured between the closest senses.
//! Sources are queued from the highest synset id down, which decides between
//! ancestors that tie on both total length and distance from the second noun.

mod builder;
mod index;

use std::sync::Arc;

use crate::{
    Result,
    error::WordNetError,
    graph::HypernymGraph,
    sap::{AncestralPath, Sap},
};

pub use builder::WordNetBuilder;
pub use index::{Synset, SynsetId, TermIndex};

/// Immutable noun graph answering distance and common-ancestor queries.
///
/// # Examples
/// ```
/// use hypernet_core::{Synset, WordNetBuilder};
///
/// let wordnet = WordNetBuilder::new()
///     .with_synsets([
///         Synset::new(0, ["a"]),
///         Synset::new(1, ["b"]),
///         Synset::new(2, ["c"]),
///     ])
///     .with_edges([(0, 2), (1, 2)])
///     .build()?;
/// assert!(wordnet.is_noun("a"));
/// assert_eq!(wordnet.distance("a", "b")?, 2);
/// assert_eq!(wordnet.common_ancestor("a", "b")?.text(), "c");
/// # Ok::<(), hypernet_core::WordNetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct WordNet {
    name: Arc<str>,
    index: TermIndex,
    sap: Sap,
    root: SynsetId,
}

impl WordNet {
    pub(crate) fn new(name: Arc<str>, index: TermIndex, graph: HypernymGraph) -> Self {
        let root = graph.root();
        Self {
            name,
            index,
            sap: Sap::from(graph),
            root,
        }
    }

    /// Returns the label this instance was built with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over every distinct noun in first-seen order.
    pub fn nouns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.index.nouns()
    }

    /// Returns whether `word` is a known noun.
    #[must_use]
    pub fn is_noun(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Returns the term index backing this instance.
    #[must_use]
    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    /// Returns the root synset, the ancestor of every other synset.
    #[must_use]
    pub fn root(&self) -> Option<&Synset> {
        self.index.synset(self.root)
    }

    /// Length of the shortest ancestral path between any sense of `noun_a`
    /// and any sense of `noun_b`.
    ///
    /// # Errors
    /// Returns [`WordNetError::UnknownTerm`] when either noun is missing from
    /// the index.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<usize> {
        Ok(self.ancestral_path(noun_a, noun_b)?.length())
    }

    /// The synset at which a shortest ancestral path between `noun_a` and
    /// `noun_b` meets.
    ///
    /// # Errors
    /// Returns [`WordNetError::UnknownTerm`] when either noun is missing from
    /// the index.
    pub fn common_ancestor(&self, noun_a: &str, noun_b: &str) -> Result<&Synset> {
        let ancestor = self.ancestral_path(noun_a, noun_b)?.ancestor();
        self.index
            .synset(ancestor)
            .ok_or_else(|| no_common_ancestor(noun_a, noun_b))
    }

    fn ancestral_path(&self, noun_a: &str, noun_b: &str) -> Result<AncestralPath> {
        let left = self.synset_ids(noun_a)?;
        let right = self.synset_ids(noun_b)?;
        // Senses are searched newest first.
        self.sap
            .search(left.iter().rev().copied(), right.iter().rev().copied())?
            .ok_or_else(|| no_common_ancestor(noun_a, noun_b))
    }

    fn synset_ids(&self, noun: &str) -> Result<&[SynsetId]> {
        self.index
            .synset_ids(noun)
            .ok_or_else(|| WordNetError::UnknownTerm {
                term: Arc::from(noun),
            })
    }
}

fn no_common_ancestor(noun_a: &str, noun_b: &str) -> WordNetError {
    WordNetError::NoCommonAncestor {
        left: Arc::from(noun_a),
        right: Arc::from(noun_b),
    }
}

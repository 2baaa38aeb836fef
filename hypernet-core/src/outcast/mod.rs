//! Outcast detection.
//!
//! The outcast of a noun list is the noun whose summed distance to every
//! noun in the list (itself included) is largest. Ties go to the noun that
//! appears first.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{Result, error::WordNetError, wordnet::WordNet};

/// Ranks noun lists by semantic relatedness over a borrowed [`WordNet`].
///
/// # Examples
/// ```
/// use hypernet_core::{Outcast, Synset, WordNetBuilder};
///
/// let wordnet = WordNetBuilder::new()
///     .with_synsets([
///         Synset::new(0, ["thing"]),
///         Synset::new(1, ["animal"]),
///         Synset::new(2, ["dog"]),
///         Synset::new(3, ["cat"]),
///         Synset::new(4, ["chair"]),
///     ])
///     .with_edges([(1, 0), (2, 1), (3, 1), (4, 0)])
///     .build()?;
/// let outcast = Outcast::new(&wordnet);
/// assert_eq!(outcast.outcast(&["dog", "cat", "chair"])?, "chair");
/// # Ok::<(), hypernet_core::WordNetError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    /// Creates a detector backed by `wordnet`.
    #[must_use]
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// Returns the noun least related to the rest of `nouns`.
    ///
    /// # Errors
    /// Returns [`WordNetError::EmptyNounList`] for an empty list and
    /// [`WordNetError::UnknownTerm`] when any noun is missing from the index.
    #[instrument(name = "core.outcast", err, skip(self, nouns), fields(nouns = nouns.len()))]
    pub fn outcast<'n, S: AsRef<str>>(&self, nouns: &'n [S]) -> Result<&'n str> {
        if nouns.is_empty() {
            return Err(WordNetError::EmptyNounList);
        }
        if let Some(unknown) = nouns
            .iter()
            .map(AsRef::as_ref)
            .find(|noun| !self.wordnet.is_noun(noun))
        {
            return Err(WordNetError::UnknownTerm {
                term: unknown.into(),
            });
        }

        let totals = self.totals(nouns)?;
        let mut winner = 0;
        let mut best: Option<usize> = None;
        for (position, &total) in totals.iter().enumerate() {
            if best.is_none_or(|current| total > current) {
                best = Some(total);
                winner = position;
            }
        }

        let noun = nouns
            .get(winner)
            .map(AsRef::as_ref)
            .ok_or(WordNetError::EmptyNounList)?;
        debug!(outcast = noun, total = best, "outcast selected");
        Ok(noun)
    }

    /// Ranks every list independently in parallel, preserving input order.
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    pub fn outcast_batch<'n, S>(&self, lists: &'n [Vec<S>]) -> Vec<Result<&'n str>>
    where
        S: AsRef<str> + Sync,
    {
        lists
            .par_iter()
            .map(|nouns| self.outcast(nouns.as_slice()))
            .collect()
    }

    /// Summed distances per noun. Distance is symmetric and zero from a noun
    /// to itself, so each unordered pair is queried once.
    fn totals<S: AsRef<str>>(&self, nouns: &[S]) -> Result<Vec<usize>> {
        let mut totals = vec![0; nouns.len()];
        for (i, left) in nouns.iter().enumerate() {
            for (j, right) in nouns.iter().enumerate().skip(i + 1) {
                let distance = self.wordnet.distance(left.as_ref(), right.as_ref())?;
                totals[i] += distance;
                totals[j] += distance;
            }
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests;

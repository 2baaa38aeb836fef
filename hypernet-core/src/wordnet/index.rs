//! Noun-to-synset lookup tables.

use std::collections::{HashMap, hash_map::Entry};

use crate::error::WordNetError;

/// Dense, zero-based synset identifier; also the synset's graph vertex.
pub type SynsetId = usize;

/// A set of synonymous nouns sharing one sense.
///
/// # Examples
/// ```
/// use hypernet_core::Synset;
///
/// let synset = Synset::new(4, ["horse", "Equus_caballus"]).with_gloss("solid-hoofed herbivore");
/// assert_eq!(synset.id(), 4);
/// assert_eq!(synset.text(), "horse Equus_caballus");
/// assert_eq!(synset.gloss(), Some("solid-hoofed herbivore"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Synset {
    id: SynsetId,
    terms: Vec<String>,
    gloss: Option<String>,
}

impl Synset {
    /// Creates a synset from its id and member nouns.
    #[must_use]
    pub fn new<I, S>(id: SynsetId, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            terms: terms.into_iter().map(Into::into).collect(),
            gloss: None,
        }
    }

    /// Attaches a free-text definition.
    #[must_use]
    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }

    /// Returns the synset id.
    #[must_use]
    pub fn id(&self) -> SynsetId {
        self.id
    }

    /// Returns the member nouns in their original order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns the definition, when one was supplied.
    #[must_use]
    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    /// Returns the member nouns joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.terms.join(" ")
    }
}

/// Maps every noun to the ids of the synsets containing it, and every id back
/// to its synset.
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    ids_by_term: HashMap<String, Vec<SynsetId>>,
    nouns: Vec<String>,
    synsets: Vec<Synset>,
}

impl TermIndex {
    /// Indexes `synsets`, whose ids must equal their positions.
    ///
    /// A noun listed twice within one synset is indexed once.
    ///
    /// # Errors
    /// Returns [`WordNetError::SynsetIdMismatch`] for the first synset whose
    /// id differs from its position.
    ///
    /// # Examples
    /// ```
    /// use hypernet_core::{Synset, TermIndex};
    ///
    /// let index = TermIndex::build(vec![
    ///     Synset::new(0, ["bank"]),
    ///     Synset::new(1, ["bank", "depository"]),
    /// ])?;
    /// assert_eq!(index.synset_ids("bank"), Some(&[0, 1][..]));
    /// assert!(index.synset_ids("river").is_none());
    /// # Ok::<(), hypernet_core::WordNetError>(())
    /// ```
    pub fn build(synsets: Vec<Synset>) -> Result<Self, WordNetError> {
        let mut ids_by_term: HashMap<String, Vec<SynsetId>> = HashMap::new();
        let mut nouns = Vec::new();

        for (expected, synset) in synsets.iter().enumerate() {
            if synset.id != expected {
                return Err(WordNetError::SynsetIdMismatch {
                    expected,
                    found: synset.id,
                });
            }
            for term in &synset.terms {
                match ids_by_term.entry(term.clone()) {
                    Entry::Occupied(mut entry) => {
                        let ids = entry.get_mut();
                        // Ids arrive in ascending order, so a repeat is always last.
                        if ids.last() != Some(&expected) {
                            ids.push(expected);
                        }
                    }
                    Entry::Vacant(entry) => {
                        nouns.push(term.clone());
                        entry.insert(vec![expected]);
                    }
                }
            }
        }

        Ok(Self {
            ids_by_term,
            nouns,
            synsets,
        })
    }

    /// Returns the ids of every synset containing `term`, ascending.
    #[must_use]
    pub fn synset_ids(&self, term: &str) -> Option<&[SynsetId]> {
        self.ids_by_term.get(term).map(Vec::as_slice)
    }

    /// Returns whether `term` belongs to at least one synset.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.ids_by_term.contains_key(term)
    }

    /// Returns the synset with the given id.
    #[must_use]
    pub fn synset(&self, id: SynsetId) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// Iterates over every distinct noun in first-seen order.
    pub fn nouns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.nouns.iter().map(String::as_str)
    }

    /// Returns the number of indexed synsets.
    #[must_use]
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Returns the number of distinct nouns.
    #[must_use]
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }
}

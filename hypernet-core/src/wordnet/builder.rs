//! Builder for assembling a [`WordNet`] from parsed records.

use std::sync::Arc;

use tracing::{info, instrument};

use super::{Synset, SynsetId, TermIndex, WordNet};
use crate::{Result, graph::HypernymGraph};

const DEFAULT_NAME: &str = "wordnet";

/// Collects synsets and hypernym edges, then validates them into a
/// [`WordNet`].
///
/// The graph gets one vertex per synset, so every indexed id is a vertex.
///
/// # Examples
/// ```
/// use hypernet_core::{Synset, WordNetBuilder};
///
/// let wordnet = WordNetBuilder::new()
///     .with_name("toy")
///     .with_synset(Synset::new(0, ["dog"]))
///     .with_synset(Synset::new(1, ["cat"]))
///     .with_synset(Synset::new(2, ["animal"]))
///     .with_hypernyms(0, [2])
///     .with_hypernyms(1, [2])
///     .build()?;
/// assert_eq!(wordnet.name(), "toy");
/// assert_eq!(wordnet.common_ancestor("dog", "cat")?.text(), "animal");
/// # Ok::<(), hypernet_core::WordNetError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordNetBuilder {
    name: Option<String>,
    synsets: Vec<Synset>,
    edges: Vec<(SynsetId, SynsetId)>,
}

impl WordNetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels the resulting instance in diagnostics.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends one synset; ids must follow delivery order from zero.
    #[must_use]
    pub fn with_synset(mut self, synset: Synset) -> Self {
        self.synsets.push(synset);
        self
    }

    /// Appends several synsets.
    #[must_use]
    pub fn with_synsets(mut self, synsets: impl IntoIterator<Item = Synset>) -> Self {
        self.synsets.extend(synsets);
        self
    }

    /// Records every hypernym of `hyponym`, mirroring one hypernym record.
    #[must_use]
    pub fn with_hypernyms(
        mut self,
        hyponym: SynsetId,
        hypernyms: impl IntoIterator<Item = SynsetId>,
    ) -> Self {
        self.edges
            .extend(hypernyms.into_iter().map(|hypernym| (hyponym, hypernym)));
        self
    }

    /// Records `(hyponym, hypernym)` edges.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (SynsetId, SynsetId)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Returns the number of synsets collected so far.
    #[must_use]
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Returns the number of edges collected so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Indexes the synsets, validates the graph, and constructs the
    /// [`WordNet`].
    ///
    /// # Errors
    /// Returns [`crate::WordNetError::SynsetIdMismatch`] when synset ids are
    /// not dense and ordered, and [`crate::WordNetError::Graph`] when an edge
    /// is out of range or the graph is not a rooted DAG.
    #[instrument(
        name = "core.wordnet.build",
        err,
        skip(self),
        fields(synsets = self.synsets.len(), edges = self.edges.len()),
    )]
    pub fn build(self) -> Result<WordNet> {
        let Self {
            name,
            synsets,
            edges,
        } = self;
        let vertex_count = synsets.len();
        let index = TermIndex::build(synsets)?;
        let graph = HypernymGraph::build(vertex_count, edges)?;
        let name: Arc<str> = Arc::from(name.as_deref().unwrap_or(DEFAULT_NAME));
        info!(
            wordnet = %name,
            nouns = index.noun_count(),
            root = graph.root(),
            "wordnet constructed"
        );
        Ok(WordNet::new(name, index, graph))
    }
}

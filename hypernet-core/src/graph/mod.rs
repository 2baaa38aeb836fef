//! Hypernym graph storage.
//!
//! [`Digraph`] is a plain adjacency-list digraph with range-checked edges.
//! [`HypernymGraph`] wraps a [`Digraph`] that has passed rooted-DAG
//! validation and is the only graph type the noun facade accepts.

mod validate;

use std::{iter::Copied, slice::Iter};

use tracing::{debug, instrument};

use crate::error::GraphError;

/// Directed graph on the vertex set `0..vertex_count`.
///
/// Edges point from hyponym to hypernym. Parallel edges are kept; adjacency
/// is reported in insertion order. Cloning produces an independent deep copy.
///
/// # Examples
/// ```
/// use hypernet_core::Digraph;
///
/// let graph = Digraph::from_edges(3, [(0, 2), (1, 2)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// let hypernyms: Vec<usize> = graph.adjacent(0).into_iter().flatten().collect();
/// assert_eq!(hypernyms, [2]);
/// # Ok::<(), hypernet_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Digraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Digraph {
    /// Builds a digraph with `vertex_count` vertices and the given
    /// `(hyponym, hypernym)` edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfRange`] when an endpoint is not below
    /// `vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut edge_count = 0;
        for (from, to) in edges {
            if to >= vertex_count {
                return Err(GraphError::EdgeOutOfRange {
                    from,
                    to,
                    vertex_count,
                });
            }
            let targets = adjacency.get_mut(from).ok_or(GraphError::EdgeOutOfRange {
                from,
                to,
                vertex_count,
            })?;
            targets.push(to);
            edge_count += 1;
        }
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether `vertex` names a vertex of this graph.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the hypernyms of `vertex`, or `None` when it is out of range.
    ///
    /// The iterator borrows the graph and can be requested again at will.
    #[must_use]
    pub fn adjacent(&self, vertex: usize) -> Option<Copied<Iter<'_, usize>>> {
        self.adjacency
            .get(vertex)
            .map(|targets| targets.iter().copied())
    }

    /// Returns the out-degree of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn out_degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    pub(crate) fn neighbours(&self, vertex: usize) -> &[usize] {
        self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice)
    }

    /// Builds the hyponym lists, i.e. the adjacency of the reversed graph.
    pub(crate) fn reversed_adjacency(&self) -> Vec<Vec<usize>> {
        let mut reversed = vec![Vec::new(); self.vertex_count()];
        for (from, targets) in self.adjacency.iter().enumerate() {
            for &to in targets {
                if let Some(sources) = reversed.get_mut(to) {
                    sources.push(from);
                }
            }
        }
        reversed
    }
}

/// A [`Digraph`] proven to be a rooted DAG.
///
/// Exactly one vertex has no hypernyms, every vertex has a directed path to
/// it, and no directed cycle exists. Instances are immutable.
///
/// # Examples
/// ```
/// use hypernet_core::{GraphError, HypernymGraph};
///
/// let graph = HypernymGraph::build(3, [(0, 2), (1, 2)])?;
/// assert_eq!(graph.root(), 2);
///
/// let err = HypernymGraph::build(3, [(0, 2)]).expect_err("1 and 2 are both roots");
/// assert!(matches!(err, GraphError::MultipleRoots { .. }));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HypernymGraph {
    graph: Digraph,
    root: usize,
}

impl HypernymGraph {
    /// Builds and validates a graph from `(hyponym, hypernym)` edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfRange`] for invalid endpoints and the
    /// rooted-DAG variants of [`GraphError`] when validation fails.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::try_from(Digraph::from_edges(vertex_count, edges)?)
    }

    /// Returns the unique vertex without hypernyms.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the hypernyms of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn adjacent(&self, vertex: usize) -> Option<Copied<Iter<'_, usize>>> {
        self.graph.adjacent(vertex)
    }

    /// Borrows the underlying digraph.
    #[must_use]
    pub fn as_digraph(&self) -> &Digraph {
        &self.graph
    }

    /// Consumes the wrapper, returning the underlying digraph.
    #[must_use]
    pub fn into_digraph(self) -> Digraph {
        self.graph
    }
}

impl TryFrom<Digraph> for HypernymGraph {
    type Error = GraphError;

    #[instrument(
        name = "core.graph.validate",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn try_from(graph: Digraph) -> Result<Self, Self::Error> {
        let root = validate::find_root(&graph)?;
        validate::ensure_reaches_root(&graph, root)?;
        validate::ensure_acyclic(&graph)?;
        debug!(root, "hypernym graph validated");
        Ok(Self { graph, root })
    }
}

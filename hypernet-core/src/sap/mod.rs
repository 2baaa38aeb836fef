//! Shortest ancestral path search.
//!
//! An ancestral path between vertex sets `V` and `W` runs from some `v ∈ V`
//! up hypernym edges to a common ancestor and back down to some `w ∈ W`.
//! [`Sap`] finds the shortest such path with two multi-source breadth-first
//! walks: the first records distances from `V` for every vertex it reaches,
//! the second walks from `W` and scores every vertex the first walk reached.
//! Both walks run to exhaustion, so the reported length is the global
//! minimum rather than the first meeting point.
//!
//! Among ancestors with the same total length the one dequeued first by the
//! `W` walk wins, i.e. the tie goes to the ancestor closest to `W`.

use std::collections::VecDeque;

use tracing::trace;

use crate::{
    error::{SapError, VertexSetSide},
    graph::{Digraph, HypernymGraph},
};

/// Length and meeting point of a shortest ancestral path.
///
/// # Examples
/// ```
/// use hypernet_core::{Digraph, Sap};
///
/// let sap = Sap::new(&Digraph::from_edges(3, [(0, 2), (1, 2)])?);
/// let path = sap.search([0], [1])?.expect("both reach vertex 2");
/// assert_eq!(path.length(), 2);
/// assert_eq!(path.ancestor(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AncestralPath {
    length: usize,
    ancestor: usize,
}

impl AncestralPath {
    /// Number of edges on the path.
    #[must_use]
    pub fn length(self) -> usize {
        self.length
    }

    /// Common ancestor at which the two halves of the path meet.
    #[must_use]
    pub fn ancestor(self) -> usize {
        self.ancestor
    }
}

/// Shortest-ancestral-path engine over a private copy of a digraph.
///
/// The engine holds no state between queries, so a shared reference may be
/// queried from several threads at once.
#[derive(Clone, Debug)]
pub struct Sap {
    graph: Digraph,
}

impl Sap {
    /// Creates an engine over a deep copy of `graph`.
    ///
    /// Later changes to the caller's graph value cannot affect results.
    #[must_use]
    pub fn new(graph: &Digraph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }

    /// Returns the number of vertices in the searched graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Finds a shortest ancestral path between any vertex of `v` and any
    /// vertex of `w`.
    ///
    /// A single vertex is passed as a one-element array. Returns `Ok(None)`
    /// when the sets share no common ancestor.
    ///
    /// # Errors
    /// Returns [`SapError::EmptyVertexSet`] when either set is empty and
    /// [`SapError::VertexOutOfRange`] when a set names a missing vertex.
    ///
    /// # Examples
    /// ```
    /// use hypernet_core::{Digraph, Sap};
    ///
    /// // 0 -> 1 -> 3 and 2 -> 3: vertex 3 is the only ancestor shared by
    /// // {0} and {2}.
    /// let graph = Digraph::from_edges(4, [(0, 1), (1, 3), (2, 3)])?;
    /// let sap = Sap::new(&graph);
    /// let path = sap.search([0], [2])?.expect("vertex 3 is shared");
    /// assert_eq!((path.length(), path.ancestor()), (3, 3));
    ///
    /// // Polysemous sources: {0, 2} against {1}.
    /// let path = sap.search([0, 2], [1])?.expect("vertex 1 is shared");
    /// assert_eq!((path.length(), path.ancestor()), (1, 1));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn search<V, W>(&self, v: V, w: W) -> Result<Option<AncestralPath>, SapError>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        let sources = self.checked_sources(v, VertexSetSide::Left)?;
        let targets = self.checked_sources(w, VertexSetSide::Right)?;

        let from_v = self.distances_from(&sources);
        let path = self.meet(&targets, &from_v);
        trace!(
            left = sources.len(),
            right = targets.len(),
            length = path.map(AncestralPath::length),
            "ancestral path search finished"
        );
        Ok(path)
    }

    /// Length of a shortest ancestral path, or `None` when no common
    /// ancestor exists.
    ///
    /// # Errors
    /// See [`Sap::search`].
    pub fn length<V, W>(&self, v: V, w: W) -> Result<Option<usize>, SapError>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        Ok(self.search(v, w)?.map(AncestralPath::length))
    }

    /// A common ancestor on a shortest ancestral path, or `None` when no
    /// common ancestor exists.
    ///
    /// # Errors
    /// See [`Sap::search`].
    pub fn ancestor<V, W>(&self, v: V, w: W) -> Result<Option<usize>, SapError>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        Ok(self.search(v, w)?.map(AncestralPath::ancestor))
    }

    fn checked_sources<I>(&self, vertices: I, side: VertexSetSide) -> Result<Vec<usize>, SapError>
    where
        I: IntoIterator<Item = usize>,
    {
        let vertex_count = self.vertex_count();
        let sources: Vec<usize> = vertices.into_iter().collect();
        if sources.is_empty() {
            return Err(SapError::EmptyVertexSet { side });
        }
        if let Some(&vertex) = sources.iter().find(|&&vertex| vertex >= vertex_count) {
            return Err(SapError::VertexOutOfRange {
                side,
                vertex,
                vertex_count,
            });
        }
        Ok(sources)
    }

    /// Multi-source BFS recording the hop distance from the nearest source.
    fn distances_from(&self, sources: &[usize]) -> Vec<Option<usize>> {
        let mut distances = vec![None; self.vertex_count()];
        let mut queue = VecDeque::with_capacity(sources.len());
        for &source in sources {
            if distances[source].is_none() {
                distances[source] = Some(0);
                queue.push_back((source, 0));
            }
        }

        while let Some((vertex, distance)) = queue.pop_front() {
            for &next in self.graph.neighbours(vertex) {
                if distances[next].is_none() {
                    distances[next] = Some(distance + 1);
                    queue.push_back((next, distance + 1));
                }
            }
        }
        distances
    }

    /// Multi-source BFS from `targets`, scoring every vertex also reached
    /// from the other side. Only a strictly shorter total replaces the best.
    fn meet(&self, targets: &[usize], from_v: &[Option<usize>]) -> Option<AncestralPath> {
        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::with_capacity(targets.len());
        for &target in targets {
            if !visited[target] {
                visited[target] = true;
                queue.push_back((target, 0));
            }
        }

        let mut best: Option<AncestralPath> = None;
        while let Some((vertex, distance)) = queue.pop_front() {
            if let Some(Some(from_source)) = from_v.get(vertex) {
                let length = from_source + distance;
                if best.is_none_or(|current| length < current.length) {
                    best = Some(AncestralPath {
                        length,
                        ancestor: vertex,
                    });
                }
            }
            for &next in self.graph.neighbours(vertex) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back((next, distance + 1));
                }
            }
        }
        best
    }
}

impl From<Digraph> for Sap {
    fn from(graph: Digraph) -> Self {
        Self { graph }
    }
}

impl From<HypernymGraph> for Sap {
    fn from(graph: HypernymGraph) -> Self {
        Self::from(graph.into_digraph())
    }
}


#[cfg(test)]
mod property;

//! Rooted-DAG validation for hypernym graphs.
//!
//! All walks are iterative so long hypernym chains cannot exhaust the stack.

use std::collections::VecDeque;

use tracing::warn;

use super::Digraph;
use crate::error::GraphError;

/// Returns the single vertex with out-degree zero.
pub(super) fn find_root(graph: &Digraph) -> Result<usize, GraphError> {
    let roots: Vec<usize> = (0..graph.vertex_count())
        .filter(|&vertex| graph.neighbours(vertex).is_empty())
        .collect();
    match roots.as_slice() {
        [] => {
            warn!("graph has no vertex without hypernyms");
            Err(GraphError::NoRoot)
        }
        [root] => Ok(*root),
        _ => {
            warn!(candidates = roots.len(), "graph has several candidate roots");
            Err(GraphError::MultipleRoots { roots })
        }
    }
}

/// Walks hyponym edges outward from `root` and fails on the lowest vertex the
/// walk never marks.
pub(super) fn ensure_reaches_root(graph: &Digraph, root: usize) -> Result<(), GraphError> {
    let hyponyms = graph.reversed_adjacency();
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([root]);
    visited[root] = true;

    while let Some(vertex) = queue.pop_front() {
        for &child in hyponyms.get(vertex).map_or(&[][..], Vec::as_slice) {
            if !visited[child] {
                visited[child] = true;
                queue.push_back(child);
            }
        }
    }

    match visited.iter().position(|&seen| !seen) {
        Some(vertex) => {
            warn!(vertex, root, "vertex has no path to the root");
            Err(GraphError::UnreachableVertex { vertex, root })
        }
        None => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Finished,
}

/// Depth-first search with an explicit frame stack; a back edge to a vertex
/// still on the current path is a cycle.
pub(super) fn ensure_acyclic(graph: &Digraph) -> Result<(), GraphError> {
    let mut marks = vec![Mark::Unvisited; graph.vertex_count()];
    // Each frame is (vertex, index of the next edge to follow).
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..graph.vertex_count() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::OnPath;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let next = graph.neighbours(vertex).get(frame.1).copied();
            frame.1 += 1;
            match next {
                Some(target) => match marks[target] {
                    Mark::Unvisited => {
                        marks[target] = Mark::OnPath;
                        stack.push((target, 0));
                    }
                    Mark::OnPath => {
                        warn!(vertex = target, "hypernym cycle detected");
                        return Err(GraphError::Cycle { vertex: target });
                    }
                    Mark::Finished => {}
                },
                None => {
                    marks[vertex] = Mark::Finished;
                    stack.pop();
                }
            }
        }
    }
    Ok(())
}

//! Shared test utilities for `hypernet-core`.

use proptest::test_runner::Config as ProptestConfig;
use rand::{Rng, rngs::SmallRng, seq::SliceRandom};

use crate::wordnet::Synset;

/// Builds the proptest configuration shared by property suites.
///
/// A parseable `PROPTEST_CASES` value overrides `default_cases`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// A randomly generated rooted DAG and the root it was built around.
#[derive(Clone, Debug)]
pub(crate) struct DagFixture {
    pub(crate) vertex_count: usize,
    pub(crate) edges: Vec<(usize, usize)>,
    pub(crate) root: usize,
}

/// Generates a rooted DAG with between one and `max_vertices` vertices.
///
/// Vertices are built in topological order (every non-final vertex points at
/// one to three later vertices, parallel edges allowed) and then relabelled
/// with a random permutation so the root is not always the last id.
pub(crate) fn random_rooted_dag(rng: &mut SmallRng, max_vertices: usize) -> DagFixture {
    let vertex_count = rng.gen_range(1..=max_vertices);
    let mut labels: Vec<usize> = (0..vertex_count).collect();
    labels.shuffle(rng);

    let mut edges = Vec::new();
    for position in 0..vertex_count.saturating_sub(1) {
        let later = vertex_count - position - 1;
        let fan_out = rng.gen_range(1..=later.min(3));
        for _ in 0..fan_out {
            let target = rng.gen_range(position + 1..vertex_count);
            edges.push((labels[position], labels[target]));
        }
    }

    DagFixture {
        vertex_count,
        edges,
        root: labels[vertex_count - 1],
    }
}

/// Picks between one and `max_len` vertices, duplicates allowed.
pub(crate) fn random_vertex_set(
    rng: &mut SmallRng,
    vertex_count: usize,
    max_len: usize,
) -> Vec<usize> {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| rng.gen_range(0..vertex_count)).collect()
}

/// All-pairs hop distances by Floyd–Warshall, used as an oracle.
pub(crate) fn all_pairs_hops(vertex_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<Option<usize>>> {
    let mut hops = vec![vec![None; vertex_count]; vertex_count];
    for (vertex, row) in hops.iter_mut().enumerate() {
        row[vertex] = Some(0);
    }
    for &(from, to) in edges {
        if from != to {
            hops[from][to] = Some(1);
        }
    }
    for via in 0..vertex_count {
        for from in 0..vertex_count {
            let Some(first) = hops[from][via] else {
                continue;
            };
            for to in 0..vertex_count {
                if let Some(second) = hops[via][to] {
                    let through = first + second;
                    if hops[from][to].is_none_or(|direct| through < direct) {
                        hops[from][to] = Some(through);
                    }
                }
            }
        }
    }
    hops
}

/// Hop distance from the nearest member of `sources` to `target`.
pub(crate) fn set_hops(
    hops: &[Vec<Option<usize>>],
    sources: &[usize],
    target: usize,
) -> Option<usize> {
    sources
        .iter()
        .filter_map(|&source| hops[source][target])
        .min()
}

/// Synsets for a small animal taxonomy plus furniture, with the hypernym
/// edges that connect them under `entity`.
///
/// ```text
/// entity(0)
/// ├── organism(1) ── animal(2) ── mammal(3)
/// │                              ├── equine(4) ── horse(6), zebra(7)
/// │                              └── carnivore(5) ── feline(8) ── cat(10)
/// │                                                  └── bear(9)
/// └── artifact(11) ── furniture(12) ── table(13)
/// ```
pub(crate) fn animal_taxonomy() -> (Vec<Synset>, Vec<(usize, usize)>) {
    let names: [&[&str]; 14] = [
        &["entity"],
        &["organism", "being"],
        &["animal", "beast"],
        &["mammal"],
        &["equine", "equid"],
        &["carnivore"],
        &["horse", "Equus_caballus"],
        &["zebra"],
        &["feline", "felid"],
        &["bear"],
        &["cat", "true_cat"],
        &["artifact", "artefact"],
        &["furniture", "piece_of_furniture"],
        &["table"],
    ];
    let synsets = names
        .iter()
        .enumerate()
        .map(|(id, terms)| Synset::new(id, terms.iter().copied()))
        .collect();
    let edges = vec![
        (1, 0),
        (2, 1),
        (3, 2),
        (4, 3),
        (5, 3),
        (6, 4),
        (7, 4),
        (8, 5),
        (9, 5),
        (10, 8),
        (11, 0),
        (12, 11),
        (13, 12),
    ];
    (synsets, edges)
}

//! Property tests comparing [`Sap`] against an all-pairs oracle on random
//! rooted DAGs.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

use super::Sap;
use crate::{
    graph::HypernymGraph,
    test_utils::{
        DagFixture, all_pairs_hops, random_rooted_dag, random_vertex_set, set_hops,
        suite_proptest_config,
    },
};

const MAX_VERTICES: usize = 24;
const MAX_SET_LEN: usize = 3;

#[derive(Debug)]
struct Case {
    fixture: DagFixture,
    v: Vec<usize>,
    w: Vec<usize>,
}

fn case_strategy() -> impl Strategy<Value = Case> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fixture = random_rooted_dag(&mut rng, MAX_VERTICES);
        let v = random_vertex_set(&mut rng, fixture.vertex_count, MAX_SET_LEN);
        let w = random_vertex_set(&mut rng, fixture.vertex_count, MAX_SET_LEN);
        Case { fixture, v, w }
    })
}

fn engine(fixture: &DagFixture) -> Result<Sap, TestCaseError> {
    let graph = HypernymGraph::build(fixture.vertex_count, fixture.edges.iter().copied())
        .map_err(|err| TestCaseError::fail(format!("generated graph rejected: {err}")))?;
    prop_assert_eq!(graph.root(), fixture.root);
    Ok(Sap::from(graph))
}

fn run_global_minimum_property(case: &Case) -> Result<(), TestCaseError> {
    let sap = engine(&case.fixture)?;
    let hops = all_pairs_hops(case.fixture.vertex_count, &case.fixture.edges);

    let totals: Vec<Option<(usize, usize)>> = (0..case.fixture.vertex_count)
        .map(|vertex| {
            let from_v = set_hops(&hops, &case.v, vertex)?;
            let from_w = set_hops(&hops, &case.w, vertex)?;
            Some((from_v + from_w, from_w))
        })
        .collect();
    let expected_length = totals.iter().flatten().map(|&(total, _)| total).min();

    let path = sap
        .search(case.v.iter().copied(), case.w.iter().copied())
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let Some(path) = path else {
        return Err(TestCaseError::fail("rooted DAG must always yield a path"));
    };

    prop_assert_eq!(Some(path.length()), expected_length);
    let Some((total, from_w)) = totals[path.ancestor()] else {
        return Err(TestCaseError::fail("ancestor must be reachable from both sets"));
    };
    prop_assert_eq!(total, path.length());

    // Among equal totals the ancestor nearest to `w` wins.
    let nearest_w = totals
        .iter()
        .flatten()
        .filter(|&&(candidate, _)| candidate == total)
        .map(|&(_, distance)| distance)
        .min();
    prop_assert_eq!(Some(from_w), nearest_w);
    Ok(())
}

fn run_symmetry_property(case: &Case) -> Result<(), TestCaseError> {
    let sap = engine(&case.fixture)?;
    let forward = sap
        .length(case.v.iter().copied(), case.w.iter().copied())
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let backward = sap
        .length(case.w.iter().copied(), case.v.iter().copied())
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    prop_assert_eq!(forward, backward);
    prop_assert!(forward.is_some());
    Ok(())
}

fn run_self_distance_property(case: &Case) -> Result<(), TestCaseError> {
    let sap = engine(&case.fixture)?;
    for vertex in 0..case.fixture.vertex_count {
        let path = sap
            .search([vertex], [vertex])
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(path.map(|found| (found.length(), found.ancestor())), Some((0, vertex)));
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn sap_matches_oracle_minimum(case in case_strategy()) {
        run_global_minimum_property(&case)?;
    }

    #[test]
    fn sap_length_is_symmetric(case in case_strategy()) {
        run_symmetry_property(&case)?;
    }

    #[test]
    fn sap_vertex_meets_itself(case in case_strategy()) {
        run_self_distance_property(&case)?;
    }
}

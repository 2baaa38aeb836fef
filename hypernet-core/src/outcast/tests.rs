//! Unit tests for outcast detection.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::Outcast;
use crate::{
    error::WordNetError,
    test_utils::animal_taxonomy,
    wordnet::{WordNet, WordNetBuilder},
};

#[fixture]
fn animals() -> WordNet {
    let (synsets, edges) = animal_taxonomy();
    WordNetBuilder::new()
        .with_synsets(synsets)
        .with_edges(edges)
        .build()
        .expect("taxonomy is a rooted DAG")
}

#[rstest]
#[case::furniture_among_animals(&["horse", "zebra", "cat", "bear", "table"], "table")]
#[case::order_does_not_matter(&["table", "horse", "zebra", "cat", "bear"], "table")]
#[case::cat_among_equines(&["horse", "zebra", "cat"], "cat")]
#[case::single_noun(&["bear"], "bear")]
#[case::repeated_noun(&["cat", "cat", "horse"], "horse")]
fn selects_least_related_noun(animals: WordNet, #[case] nouns: &[&str], #[case] expected: &str) {
    let outcast = Outcast::new(&animals);
    assert_eq!(outcast.outcast(nouns).expect("nouns are known"), expected);
}

#[rstest]
#[case(&["horse", "zebra"], "horse")]
#[case(&["zebra", "horse"], "zebra")]
#[case(&["bear", "cat"], "bear")]
fn ties_keep_the_earliest_noun(animals: WordNet, #[case] nouns: &[&str], #[case] expected: &str) {
    let outcast = Outcast::new(&animals);
    assert_eq!(outcast.outcast(nouns).expect("nouns are known"), expected);
}

#[rstest]
fn accepts_owned_strings(animals: WordNet) {
    let nouns: Vec<String> = ["cat", "bear", "table"].map(String::from).to_vec();
    let outcast = Outcast::new(&animals);
    assert_eq!(outcast.outcast(nouns.as_slice()).expect("nouns are known"), "table");
}

#[rstest]
fn rejects_empty_list(animals: WordNet) {
    let nouns: [&str; 0] = [];
    let err = Outcast::new(&animals)
        .outcast(&nouns[..])
        .expect_err("empty list must be rejected");
    assert_eq!(err, WordNetError::EmptyNounList);
}

#[rstest]
#[case(&["unicorn"])]
#[case(&["horse", "unicorn", "cat"])]
fn rejects_unknown_nouns(animals: WordNet, #[case] nouns: &[&str]) {
    let err = Outcast::new(&animals)
        .outcast(nouns)
        .expect_err("unknown noun must be rejected");
    assert_eq!(
        err,
        WordNetError::UnknownTerm {
            term: Arc::from("unicorn")
        }
    );
}

#[cfg(feature = "parallel")]
#[rstest]
fn batch_preserves_input_order(animals: WordNet) {
    let lists = vec![
        vec!["horse", "zebra", "cat", "bear", "table"],
        vec!["unicorn"],
        vec!["horse", "zebra", "cat"],
        Vec::new(),
    ];
    let results = Outcast::new(&animals).outcast_batch(&lists);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0], Ok("table"));
    assert!(matches!(results[1], Err(WordNetError::UnknownTerm { .. })));
    assert_eq!(results[2], Ok("cat"));
    assert_eq!(results[3], Err(WordNetError::EmptyNounList));
}

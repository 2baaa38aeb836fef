//! Hypernet core library.
//!
//! Builds a validated hypernym graph, answers shortest-ancestral-path queries
//! over it, and layers noun-level distance and outcast detection on top.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod outcast;
mod sap;
mod wordnet;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{
        GraphError, GraphErrorCode, Result, SapError, SapErrorCode, VertexSetSide, WordNetError,
        WordNetErrorCode,
    },
    graph::{Digraph, HypernymGraph},
    outcast::Outcast,
    sap::{AncestralPath, Sap},
    wordnet::{Synset, SynsetId, TermIndex, WordNet, WordNetBuilder},
};

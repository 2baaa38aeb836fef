//! Error types for the Hypernet core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing or validating a hypernym graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex outside `0..vertex_count`.
    #[error("edge {from} -> {to} is out of range for a graph with {vertex_count} vertices")]
    EdgeOutOfRange {
        /// Source (hyponym) endpoint of the offending edge.
        from: usize,
        /// Target (hypernym) endpoint of the offending edge.
        to: usize,
        /// Number of vertices in the graph under construction.
        vertex_count: usize,
    },
    /// No vertex has out-degree zero, so the graph has no root.
    #[error("graph has no root: every vertex has at least one hypernym")]
    NoRoot,
    /// More than one vertex has out-degree zero.
    #[error("graph has {count} candidate roots, expected exactly one", count = .roots.len())]
    MultipleRoots {
        /// Every vertex with out-degree zero, in ascending order.
        roots: Vec<usize>,
    },
    /// A vertex has no directed path to the root.
    #[error("vertex {vertex} cannot reach root {root}")]
    UnreachableVertex {
        /// The first vertex found without a path to the root.
        vertex: usize,
        /// The graph's single candidate root.
        root: usize,
    },
    /// The graph contains a directed cycle.
    #[error("graph contains a cycle through vertex {vertex}")]
    Cycle {
        /// A vertex lying on, or downstream of, a directed cycle.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex outside the graph.
        EdgeOutOfRange => EdgeOutOfRange { .. } => "GRAPH_EDGE_OUT_OF_RANGE",
        /// No vertex has out-degree zero.
        NoRoot => NoRoot => "GRAPH_NO_ROOT",
        /// More than one vertex has out-degree zero.
        MultipleRoots => MultipleRoots { .. } => "GRAPH_MULTIPLE_ROOTS",
        /// A vertex has no directed path to the root.
        UnreachableVertex => UnreachableVertex { .. } => "GRAPH_UNREACHABLE_VERTEX",
        /// The graph contains a directed cycle.
        Cycle => Cycle { .. } => "GRAPH_CYCLE",
    }
}

/// Identifies which argument of a SAP query was rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VertexSetSide {
    /// The first (`v`) vertex set.
    Left,
    /// The second (`w`) vertex set.
    Right,
}

impl fmt::Display for VertexSetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "v",
            Self::Right => "w",
        })
    }
}

/// Invalid arguments supplied to a [`crate::Sap`] query.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SapError {
    /// A vertex set contained no vertices.
    #[error("vertex set `{side}` is empty")]
    EmptyVertexSet {
        /// The argument that was empty.
        side: VertexSetSide,
    },
    /// A vertex set contained an id outside `0..vertex_count`.
    #[error("vertex {vertex} in set `{side}` is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        /// The argument that held the offending id.
        side: VertexSetSide,
        /// The offending id.
        vertex: usize,
        /// Number of vertices in the searched graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SapError`] variants.
    enum SapErrorCode for SapError {
        /// A vertex set contained no vertices.
        EmptyVertexSet => EmptyVertexSet { .. } => "SAP_EMPTY_VERTEX_SET",
        /// A vertex set contained an out-of-range id.
        VertexOutOfRange => VertexOutOfRange { .. } => "SAP_VERTEX_OUT_OF_RANGE",
    }
}

/// Error type produced when building or querying a [`crate::WordNet`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum WordNetError {
    /// The queried noun is not present in the term index.
    #[error("`{term}` is not a known noun")]
    UnknownTerm {
        /// The noun that failed the lookup.
        term: Arc<str>,
    },
    /// Outcast detection was asked to rank an empty list.
    #[error("outcast requires at least one noun")]
    EmptyNounList,
    /// Synset ids were not dense and zero-based in delivery order.
    #[error("synset at position {expected} carries id {found}")]
    SynsetIdMismatch {
        /// The id implied by the record's position.
        expected: usize,
        /// The id the record actually carried.
        found: usize,
    },
    /// Two nouns share no common ancestor.
    #[error("`{left}` and `{right}` share no common ancestor")]
    NoCommonAncestor {
        /// First noun of the query.
        left: Arc<str>,
        /// Second noun of the query.
        right: Arc<str>,
    },
    /// The hypernym graph failed construction or validation.
    #[error("invalid hypernym graph: {0}")]
    Graph(#[from] GraphError),
    /// The underlying SAP query rejected its arguments.
    #[error("invalid ancestral path query: {0}")]
    Sap(#[from] SapError),
}

define_error_codes! {
    /// Stable codes describing [`WordNetError`] variants.
    enum WordNetErrorCode for WordNetError {
        /// The queried noun is not present in the term index.
        UnknownTerm => UnknownTerm { .. } => "WORDNET_UNKNOWN_TERM",
        /// Outcast detection was asked to rank an empty list.
        EmptyNounList => EmptyNounList => "WORDNET_EMPTY_NOUN_LIST",
        /// Synset ids were not dense and zero-based.
        SynsetIdMismatch => SynsetIdMismatch { .. } => "WORDNET_SYNSET_ID_MISMATCH",
        /// Two nouns share no common ancestor.
        NoCommonAncestor => NoCommonAncestor { .. } => "WORDNET_NO_COMMON_ANCESTOR",
        /// The hypernym graph failed validation.
        InvalidGraph => Graph(..) => "WORDNET_INVALID_GRAPH",
        /// The underlying SAP query rejected its arguments.
        InvalidQuery => Sap(..) => "WORDNET_INVALID_QUERY",
    }
}

impl WordNetError {
    /// Retrieve the inner [`GraphErrorCode`] when graph validation failed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`SapErrorCode`] when a SAP query was rejected.
    #[must_use]
    pub const fn sap_code(&self) -> Option<SapErrorCode> {
        match self {
            Self::Sap(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the facade API.
pub type Result<T> = core::result::Result<T, WordNetError>;

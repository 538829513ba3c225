#![warn(missing_docs)]

//!
//! A crate of charting and reporting helpers for data-mining models.
//! Every helper renders an already-computed result;
//! no model fitting happens here.
//!
//! This crate provides three groups of helpers.
//!
//! - Chart helpers
//!     `LiftChart` draws the decile lift of ranked predictions and
//!     `GainsChart` draws their cumulative gains,
//!     both on any plotters backend.
//!
//!
//! - Decision tree reports
//!     `TextReport` renders a fitted tree as an indented textual report,
//!     `DotExport` produces Graphviz source, and `TreePlot` draws the
//!     tree through an injected renderer such as the Graphviz `dot`
//!     binary. The tree arrives as the node arrays a tree learner
//!     exposes, wrapped in `FittedTree`.
//!
//!
//! - Text mining
//!     `print_term_document_matrix` pretty-prints the count matrix of a
//!     fitted vectorizer as a polars DataFrame.

pub mod error;
pub mod tree;
pub mod chart;
pub mod text_mining;
pub mod prelude;


pub use error::Error;

pub use tree::{
    FittedTree,
    TextReport,
    DotExport,
    TreePlot,
    DotRenderer,
    DotCommand,
    RenderCapabilities,
    RenderOutcome,
    ImageFormat,
    NO_CHILD,
};

pub use chart::{
    LiftChart,
    GainsChart,
    decile_means,
    cumulative_gains,
};

pub use text_mining::{
    FittedVectorizer,
    SparseCounts,
    print_term_document_matrix,
};

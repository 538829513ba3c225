//! Defines the error type returned by the helpers in this crate.
use polars::prelude::PolarsError;

use std::io;


/// Errors reported by the reporting/charting helpers.
/// Contract violations in the *input* (a malformed tree, a zero-sum leaf)
/// are surfaced here instead of producing a misleading report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Ratio conversion was requested for a leaf
    /// whose value group sums to zero.
    #[error("leaf node {node} has a value group summing to zero; \
             cannot convert counts to ratios")]
    InvalidLeafValue {
        /// Index of the offending node.
        node: usize,
    },


    /// The node arrays do not form a rooted binary tree.
    #[error("malformed tree: {reason}")]
    InvalidTreeStructure {
        /// Human-readable description of the violation.
        reason: String,
    },


    /// A chart was requested for an empty series.
    #[error("the series `{name}` is empty")]
    EmptySeries {
        /// Name of the offending series.
        name: String,
    },


    /// Vocabulary and count-matrix dimensions disagree.
    #[error("shape mismatch: {reason}")]
    ShapeMismatch {
        /// Human-readable description of the mismatch.
        reason: String,
    },


    /// The plotting backend failed while drawing a chart.
    #[error("failed to draw the chart: {0}")]
    Chart(String),


    /// Tree (de)serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),


    /// An I/O failure while writing a rendered artifact.
    #[error(transparent)]
    Io(#[from] io::Error),


    /// An error bubbled up from polars.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

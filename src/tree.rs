//! Reporting and visualization of fitted decision trees.
//! The tree itself is produced by an external learner;
//! this module only reads its node arrays.

/// Defines the array representation of a fitted tree.
pub mod fitted;
/// Defines the indented text report of a tree.
pub mod text_report;
/// Defines the Graphviz source export of a tree.
pub mod dot;
/// Defines the graphical rendering of a tree.
pub mod plot;


pub use fitted::{FittedTree, NO_CHILD};
pub use text_report::TextReport;
pub use dot::DotExport;
pub use plot::{
    DotCommand,
    DotRenderer,
    ImageFormat,
    RenderCapabilities,
    RenderOutcome,
    TreePlot,
};

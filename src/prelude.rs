//! Exports the chart and report helpers.
//!
pub use crate::error::Error;


pub use crate::chart::{
    // Lift -------------------------------------
    LiftChart,
    decile_means,


    // Gains ------------------------------------
    GainsChart,
    cumulative_gains,
};


pub use crate::tree::{
    // Tree input contract
    FittedTree,
    NO_CHILD,


    // Text report
    TextReport,


    // Graphical rendering
    DotExport,
    TreePlot,
    DotRenderer,
    DotCommand,
    RenderCapabilities,
    RenderOutcome,
    ImageFormat,
};


pub use crate::text_mining::{
    FittedVectorizer,
    SparseCounts,
    print_term_document_matrix,
};

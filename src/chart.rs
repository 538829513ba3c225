//! Lift and cumulative-gains charts for ranked predictions.
//! The numeric summaries are plain functions so that they can be
//! inspected without a drawing backend.
use crate::error::Error;

use std::fmt::Display;

/// Defines the decile lift chart.
pub mod lift;
/// Defines the cumulative gains chart.
pub mod gains;


pub use lift::{LiftChart, decile_means, N_DECILES};
pub use gains::{GainsChart, cumulative_gains};


/// Map a plotters error into [`Error::Chart`].
pub(crate) fn chart_err<E: Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

//! Typed errors for the imputation, analysis and encoding engines

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors the core engines can surface.
///
/// All variants are recoverable at the presentation boundary: a failed
/// computation degrades to a visible message while the rest of the
/// dashboard stays interactive.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A numeric aggregate was requested over an empty value set
    #[error("cannot compute {aggregate} for column '{column}': no non-missing values")]
    Computation {
        aggregate: &'static str,
        column: String,
    },

    /// A method assignment that is invalid for the column's type/role.
    /// The prompts only offer valid choices, so hitting this means the
    /// assignment was built outside the chooser.
    #[error("method '{method}' is not valid for {role} column '{column}'")]
    Configuration {
        method: &'static str,
        column: String,
        role: &'static str,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

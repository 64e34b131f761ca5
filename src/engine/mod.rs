//! Core engines: imputation, analysis and encoding
//!
//! Pure table-in/table-out computations. The presentation layer owns all
//! I/O and recovers from every [`EngineError`] without ending the session.

pub mod analyze;
pub mod encode;
pub mod error;
pub mod impute;

pub use analyze::{
    correlation_matrix, describe_column, group_means, CategoricalSummary, ColumnSummary,
    CorrelationAnalysis, NumericSummary, RankedPair, RANKED_PAIR_LIMIT,
};
pub use encode::{encode, EncodingStrategy};
pub use error::EngineError;
pub use impute::{
    column_role, impute, valid_methods, ColumnRole, ImputationMethod, MethodAssignment,
};

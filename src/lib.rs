//! Medscope: interactive exploratory analysis for a maternal health risk dataset
//!
//! Loads a fixed CSV once per session, summarizes columns, handles missing
//! values with a per-column method assignment, computes correlations and
//! group-wise means, and encodes categorical columns.

pub mod cli;
pub mod dataset;
pub mod engine;
pub mod report;
pub mod utils;

//! Failure types returned by the external collaborators
//!
//! Both kinds are soft failures: agents log them and degrade their output
//! instead of passing them on to the harness.

use thiserror::Error;

/// Failure of a researcher to produce a report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResearchError {
    #[error("Invalid research input: {0}")]
    InvalidInput(String),

    #[error("Research upstream failure: {0}")]
    Upstream(String),
}

/// Failure to turn a completion into an outcome prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Malformed completion: {0}")]
    MalformedCompletion(String),

    #[error("Completion is missing numeric field `{0}`")]
    MissingField(&'static str),

    #[error("Completion field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("Completion upstream failure: {0}")]
    Upstream(String),
}

//! Result Mapper - converts a raw completion record into a Prediction

use crate::collaborators::CompletionPrediction;
use crate::error::PredictionError;
use common::{EvaluatedQuestion, OutcomePrediction, Prediction};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to do with completion fields outside `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeRangePolicy {
    /// Copy values uninterpreted
    #[default]
    PassThrough,
    /// Treat any out-of-range or NaN field as a prediction failure
    Reject,
    /// Clamp into `[0, 1]`; NaN is still rejected
    Clamp,
}

/// Builds a [`Prediction`] field-for-field from a raw completion
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultMapper {
    policy: OutcomeRangePolicy,
}

impl ResultMapper {
    pub fn new(policy: OutcomeRangePolicy) -> Self {
        Self { policy }
    }

    /// Wrap the evaluation and a new outcome built from `raw`
    ///
    /// Only fails when the configured policy refuses the values.
    pub fn map(
        &self,
        raw: &CompletionPrediction,
        evaluation: Option<EvaluatedQuestion>,
    ) -> Result<Prediction, PredictionError> {
        let outcome = OutcomePrediction {
            p_yes: self.apply("p_yes", raw.p_yes)?,
            confidence: self.apply("confidence", raw.confidence)?,
            info_utility: self.apply("info_utility", raw.info_utility)?,
        };

        Ok(Prediction::new(evaluation, outcome))
    }

    /// Decode a raw completion dictionary and map it
    pub fn map_value(
        &self,
        raw: &serde_json::Value,
        evaluation: Option<EvaluatedQuestion>,
    ) -> Result<Prediction, PredictionError> {
        let completion = CompletionPrediction::from_value(raw)?;
        self.map(&completion, evaluation)
    }

    fn apply(&self, field: &'static str, value: f64) -> Result<f64, PredictionError> {
        let in_range = (0.0..=1.0).contains(&value);
        match self.policy {
            OutcomeRangePolicy::PassThrough => Ok(value),
            OutcomeRangePolicy::Reject if !in_range => {
                Err(PredictionError::OutOfRange { field, value })
            }
            OutcomeRangePolicy::Reject => Ok(value),
            OutcomeRangePolicy::Clamp if value.is_nan() => {
                Err(PredictionError::OutOfRange { field, value })
            }
            OutcomeRangePolicy::Clamp => {
                if !in_range {
                    debug!("Clamping {} from {} into [0, 1]", field, value);
                }
                Ok(value.clamp(0.0, 1.0))
            }
        }
    }
}

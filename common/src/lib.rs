//! Shared types for the benchmarked prediction agents
//!
//! Every agent run on a market question produces a [`Prediction`]. The types
//! here are plain data: created fresh per question, never cached, and handed
//! back to the benchmarking harness once the run is recorded.

use serde::{Deserialize, Serialize};

/// Result of deciding whether a question can be predicted at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedQuestion {
    pub question: String,
    pub is_predictable: bool,
}

impl EvaluatedQuestion {
    pub fn new(question: impl Into<String>, is_predictable: bool) -> Self {
        Self {
            question: question.into(),
            is_predictable,
        }
    }

    /// Evaluation used by agents that skip the evaluator entirely
    pub fn predictable(question: impl Into<String>) -> Self {
        Self::new(question, true)
    }
}

/// Structured numeric outcome for a question
///
/// Fields are expected in `[0, 1]` but are not validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomePrediction {
    pub p_yes: f64,
    pub confidence: f64,
    pub info_utility: f64,
}

impl OutcomePrediction {
    /// True when every field lies in the closed unit interval
    pub fn is_within_unit_range(&self) -> bool {
        [self.p_yes, self.confidence, self.info_utility]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

/// Outward-facing result of one agent run on one question
///
/// A failed research or prediction step leaves `outcome_prediction` empty
/// while keeping whatever evaluation was obtained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub evaluation: Option<EvaluatedQuestion>,
    #[serde(default)]
    pub outcome_prediction: Option<OutcomePrediction>,
}

impl Prediction {
    pub fn new(evaluation: Option<EvaluatedQuestion>, outcome: OutcomePrediction) -> Self {
        Self {
            evaluation,
            outcome_prediction: Some(outcome),
        }
    }

    /// Partial result carrying only the evaluation
    pub fn evaluation_only(evaluation: EvaluatedQuestion) -> Self {
        Self {
            evaluation: Some(evaluation),
            outcome_prediction: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome_prediction.is_some()
    }
}

/// Three related phrasings of one source question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephrasedQuestionSet {
    pub original_question: String,
    pub negated_question: String,
    pub open_ended_question: String,
}

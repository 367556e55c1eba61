//! Narrow interfaces to the external collaborators
//!
//! Research generation, question evaluation, rephrasing and the completion
//! call all live outside this crate. Agents only see these traits, so the
//! benchmarking harness can plug in real clients or test stubs.

use crate::agent::EmbeddingModel;
use crate::error::{PredictionError, ResearchError};
use async_trait::async_trait;
use common::{EvaluatedQuestion, RephrasedQuestionSet};
use serde::{Deserialize, Serialize};

/// Decides whether a question is predictable
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, question: &str) -> EvaluatedQuestion;
}

/// Input handed to a researcher
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchRequest {
    pub question: String,
    pub model: String,
    /// Only meaningful to embedding-based researchers
    pub embedding_model: Option<EmbeddingModel>,
    /// Only meaningful to iterative researchers
    pub use_summaries: bool,
}

/// Produces free-text research for a question
#[async_trait]
pub trait Researcher: Send + Sync {
    async fn research(&self, request: &ResearchRequest) -> Result<String, ResearchError>;
}

/// Produces alternate phrasings of a question
#[async_trait]
pub trait Rephraser: Send + Sync {
    async fn rephrase(&self, question: &str) -> RephrasedQuestionSet;
}

/// Input handed to the completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub additional_information: String,
    pub model: String,
    pub temperature: f64,
}

/// Flat record the completion call extracts from model output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionPrediction {
    pub p_yes: f64,
    pub confidence: f64,
    pub info_utility: f64,
}

impl CompletionPrediction {
    /// Decode a raw completion dictionary, checking only that the three
    /// numeric fields are present
    pub fn from_value(value: &serde_json::Value) -> Result<Self, PredictionError> {
        let object = value.as_object().ok_or_else(|| {
            PredictionError::MalformedCompletion(format!("expected a JSON object, got {}", value))
        })?;

        let field = |name: &'static str| {
            object
                .get(name)
                .and_then(serde_json::Value::as_f64)
                .ok_or(PredictionError::MissingField(name))
        };

        Ok(Self {
            p_yes: field("p_yes")?,
            confidence: field("confidence")?,
            info_utility: field("info_utility")?,
        })
    }
}

/// Runs the completion call and extracts a flat prediction record
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionPrediction, PredictionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_fields() {
        let raw = json!({"p_yes": 0.7, "confidence": 0.5, "info_utility": 0.3, "extra": "ignored"});
        let completion = CompletionPrediction::from_value(&raw).unwrap();

        assert_eq!(completion.p_yes, 0.7);
        assert_eq!(completion.confidence, 0.5);
        assert_eq!(completion.info_utility, 0.3);
    }

    #[test]
    fn test_from_value_missing_field() {
        let raw = json!({"p_yes": 0.7, "confidence": 0.5});
        let err = CompletionPrediction::from_value(&raw).unwrap_err();
        assert_eq!(err, PredictionError::MissingField("info_utility"));
    }

    #[test]
    fn test_from_value_non_numeric_field() {
        let raw = json!({"p_yes": "likely", "confidence": 0.5, "info_utility": 0.1});
        let err = CompletionPrediction::from_value(&raw).unwrap_err();
        assert_eq!(err, PredictionError::MissingField("p_yes"));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = CompletionPrediction::from_value(&json!("the answer is yes")).unwrap_err();
        assert!(matches!(err, PredictionError::MalformedCompletion(_)));
    }

    #[test]
    fn test_out_of_range_values_pass_decoding() {
        let raw = json!({"p_yes": 1.5, "confidence": -0.2, "info_utility": 0.0});
        let completion = CompletionPrediction::from_value(&raw).unwrap();
        assert_eq!(completion.p_yes, 1.5);
        assert_eq!(completion.confidence, -0.2);
    }
}

//! Base agent capability and agent configuration
//!
//! Every benchmarked strategy implements [`BenchmarkedAgent`] so the harness
//! can run heterogeneous agents side by side without knowing their concrete
//! type.

use async_trait::async_trait;
use common::{EvaluatedQuestion, Prediction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Embedding backend used by embedding-based research
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingModel {
    #[default]
    Spacy,
    Openai,
}

impl fmt::Display for EmbeddingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingModel::Spacy => write!(f, "spacy"),
            EmbeddingModel::Openai => write!(f, "openai"),
        }
    }
}

/// Fixed configuration of an agent, set at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub agent_name: String,
    pub model: String,
    pub temperature: f64,
    /// Worker-count hint for the harness; agents never read it
    pub max_workers: Option<usize>,
    pub embedding_model: Option<EmbeddingModel>,
}

impl AgentConfig {
    pub fn new(agent_name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            model: model.into(),
            temperature: 0.0,
            max_workers: None,
            embedding_model: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_workers(mut self, max_workers: Option<usize>) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_embedding_model(mut self, embedding_model: EmbeddingModel) -> Self {
        self.embedding_model = Some(embedding_model);
        self
    }
}

/// Pipeline stage, used to tag log lines and run records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStage {
    Evaluate,
    Research,
    Predict,
}

impl fmt::Display for AgentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStage::Evaluate => write!(f, "evaluate"),
            AgentStage::Research => write!(f, "research"),
            AgentStage::Predict => write!(f, "predict"),
        }
    }
}

/// Three-stage contract shared by all benchmarked agents
///
/// The harness calls `evaluate`, `research` and `predict` in that order for
/// each question. None of them may fail: soft failures are logged and
/// degrade the result instead.
#[async_trait]
pub trait BenchmarkedAgent: Send + Sync {
    /// Get the agent's configuration
    fn config(&self) -> &AgentConfig;

    fn name(&self) -> &str {
        &self.config().agent_name
    }

    /// Decide whether the question is predictable
    async fn evaluate(&self, question: &str) -> EvaluatedQuestion;

    /// Gather research text
    ///
    /// Returns `Some("")` for agents that do not research and `None` when
    /// research soft-failed.
    async fn research(&self, question: &str) -> Option<String>;

    /// Produce the prediction
    ///
    /// On failure the result carries only `evaluated`.
    async fn predict(
        &self,
        question: &str,
        researched: &str,
        evaluated: &EvaluatedQuestion,
    ) -> Prediction;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyAgent {
        config: AgentConfig,
    }

    #[async_trait]
    impl BenchmarkedAgent for DummyAgent {
        fn config(&self) -> &AgentConfig {
            &self.config
        }

        async fn evaluate(&self, question: &str) -> EvaluatedQuestion {
            EvaluatedQuestion::predictable(question)
        }

        async fn research(&self, _question: &str) -> Option<String> {
            None
        }

        async fn predict(
            &self,
            _question: &str,
            _researched: &str,
            evaluated: &EvaluatedQuestion,
        ) -> Prediction {
            Prediction::evaluation_only(evaluated.clone())
        }
    }

    #[test]
    fn test_agent_config_defaults() {
        let config = AgentConfig::new("dummy", "gpt-4");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_workers, None);
        assert_eq!(config.embedding_model, None);
    }

    #[test]
    fn test_agent_config_builder() {
        let config = AgentConfig::new("dummy", "gpt-4")
            .with_temperature(0.7)
            .with_max_workers(Some(4))
            .with_embedding_model(EmbeddingModel::Openai);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_workers, Some(4));
        assert_eq!(config.embedding_model, Some(EmbeddingModel::Openai));
    }

    #[tokio::test]
    async fn test_name_comes_from_config() {
        let agent = DummyAgent {
            config: AgentConfig::new("dummy", "gpt-4"),
        };
        assert_eq!(agent.name(), "dummy");

        let evaluated = agent.evaluate("Q").await;
        let prediction = agent.predict("Q", "", &evaluated).await;
        assert_eq!(prediction.evaluation, Some(evaluated));
    }

    #[test]
    fn test_embedding_model_serde() {
        let model: EmbeddingModel = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(model, EmbeddingModel::Openai);
        assert_eq!(EmbeddingModel::default().to_string(), "spacy");
    }
}

//! Trivial baseline strategies
//!
//! Baselines never call a model. They treat every question as predictable,
//! do no research, and answer from a random generator or a fixed guess.

use crate::agent::{AgentConfig, BenchmarkedAgent};
use async_trait::async_trait;
use common::{EvaluatedQuestion, OutcomePrediction, Prediction};
use std::sync::Mutex;

pub const RANDOM_NAME: &str = "random";
pub const FIXED_NAME: &str = "fixed";

/// Uniformly random probability and confidence
pub struct RandomAgent {
    config: AgentConfig,
    rng: Mutex<fastrand::Rng>,
}

impl RandomAgent {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Reproducible sequence of predictions
    pub fn with_seed(config: AgentConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

#[async_trait]
impl BenchmarkedAgent for RandomAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn evaluate(&self, question: &str) -> EvaluatedQuestion {
        EvaluatedQuestion::predictable(question)
    }

    async fn research(&self, _question: &str) -> Option<String> {
        Some(String::new())
    }

    async fn predict(
        &self,
        _question: &str,
        _researched: &str,
        evaluated: &EvaluatedQuestion,
    ) -> Prediction {
        let (p_yes, confidence) = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            (rng.f64(), rng.f64())
        };

        Prediction::new(
            Some(evaluated.clone()),
            OutcomePrediction {
                p_yes,
                confidence,
                info_utility: 0.0,
            },
        )
    }
}

/// Always answers the same way with full confidence
pub struct FixedAgent {
    config: AgentConfig,
    fixed_answer: bool,
}

impl FixedAgent {
    pub fn new(config: AgentConfig, fixed_answer: bool) -> Self {
        Self {
            config,
            fixed_answer,
        }
    }
}

#[async_trait]
impl BenchmarkedAgent for FixedAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn evaluate(&self, question: &str) -> EvaluatedQuestion {
        EvaluatedQuestion::predictable(question)
    }

    async fn research(&self, _question: &str) -> Option<String> {
        Some(String::new())
    }

    async fn predict(
        &self,
        _question: &str,
        _researched: &str,
        evaluated: &EvaluatedQuestion,
    ) -> Prediction {
        let p_yes = if self.fixed_answer { 1.0 } else { 0.0 };

        Prediction::new(
            Some(evaluated.clone()),
            OutcomePrediction {
                p_yes,
                confidence: 1.0,
                info_utility: 0.0,
            },
        )
    }
}

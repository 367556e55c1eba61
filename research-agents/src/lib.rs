//! Benchmarked Prediction Agents
//!
//! This crate provides the agents compared by the prediction benchmark.
//! It includes:
//! - The three-stage agent capability (evaluate, research, predict)
//! - Research strategies, including the rephrasing decorator
//! - Result mapping from raw completions to predictions
//! - Baseline strategies and a tagged registry of all variants
//! - The per-question pipeline driven by the benchmarking harness

pub mod agent;
pub mod agents;
pub mod baselines;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod mapper;
pub mod pipeline;
pub mod registry;
pub mod rephrasing;
pub mod strategy;

// Re-export commonly used types
pub use crate::agent::{AgentConfig, AgentStage, BenchmarkedAgent, EmbeddingModel};
pub use crate::agents::{EvaluationMode, ResearchAgent};
pub use crate::baselines::{FixedAgent, RandomAgent};
pub use crate::collaborators::{
    CompletionPrediction, CompletionRequest, Evaluator, Predictor, Rephraser, ResearchRequest,
    Researcher,
};
pub use crate::config::{AgentSpec, AgentsConfig};
pub use crate::error::{PredictionError, ResearchError};
pub use crate::mapper::{OutcomeRangePolicy, ResultMapper};
pub use crate::pipeline::{run_agents, run_question, AgentRun};
pub use crate::registry::{AgentKind, AgentRegistry, Collaborators};
pub use crate::rephrasing::RephrasingResearch;
pub use crate::strategy::{NoResearch, ResearchSource, ResearchStrategy, SingleSourceResearch};

// Re-export common types for convenience
pub use common::{EvaluatedQuestion, OutcomePrediction, Prediction, RephrasedQuestionSet};

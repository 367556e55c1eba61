//! Pipeline - runs the evaluate, research and predict stages for one question
//!
//! This is the composition the benchmarking harness drives per question:
//! - evaluate, and stop with an evaluation-only result if unpredictable
//! - research, and stop with an evaluation-only result if research is absent
//! - predict from the research text
//!
//! Scheduling many questions or agents in parallel is left to the harness.

use crate::agent::{AgentStage, BenchmarkedAgent};
use chrono::{DateTime, Utc};
use common::Prediction;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Record of one agent run on one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRun {
    pub run_id: Uuid,
    pub agent_name: String,
    pub question: String,
    pub prediction: Prediction,
    /// Last stage that was reached
    pub stopped_after: AgentStage,
    pub processing_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

/// Run one agent on one question
pub async fn run_question(agent: &dyn BenchmarkedAgent, question: &str) -> AgentRun {
    let start = Instant::now();
    let (prediction, stage) = predict_question(agent, question).await;

    let run = AgentRun {
        run_id: Uuid::new_v4(),
        agent_name: agent.name().to_string(),
        question: question.to_string(),
        prediction,
        stopped_after: stage,
        processing_time_ms: start.elapsed().as_millis() as u64,
        timestamp: Utc::now(),
    };

    debug!(
        "Agent {} finished {:?} after {} in {}ms",
        run.agent_name, run.question, run.stopped_after, run.processing_time_ms
    );
    run
}

async fn predict_question(agent: &dyn BenchmarkedAgent, question: &str) -> (Prediction, AgentStage) {
    let evaluated = agent.evaluate(question).await;
    if !evaluated.is_predictable {
        info!("Agent {} judged question unpredictable: {}", agent.name(), question);
        return (Prediction::evaluation_only(evaluated), AgentStage::Evaluate);
    }

    let researched = match agent.research(question).await {
        Some(researched) => researched,
        None => {
            warn!("Agent {} has no research for: {}", agent.name(), question);
            return (Prediction::evaluation_only(evaluated), AgentStage::Research);
        }
    };

    let prediction = agent.predict(question, &researched, &evaluated).await;
    (prediction, AgentStage::Predict)
}

/// Run each agent on the same question, one after another
pub async fn run_agents(agents: &[Box<dyn BenchmarkedAgent>], question: &str) -> Vec<AgentRun> {
    let mut runs = Vec::with_capacity(agents.len());
    for agent in agents {
        runs.push(run_question(agent.as_ref(), question).await);
    }

    let complete = runs.iter().filter(|r| r.prediction.is_complete()).count();
    info!("{}/{} agents produced a full prediction", complete, runs.len());
    runs
}

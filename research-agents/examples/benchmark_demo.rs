//! Example usage of the benchmarked prediction agents
//!
//! This example demonstrates:
//! 1. Implementing the external collaborators (here with offline stubs)
//! 2. Building every registered agent from configuration
//! 3. Running all agents on a few market questions
//! 4. Example output format

use anyhow::Result;
use async_trait::async_trait;
use research_agents::{
    run_agents, AgentRegistry, AgentRun, AgentsConfig, Collaborators, CompletionPrediction,
    CompletionRequest, EvaluatedQuestion, Evaluator, PredictionError, Predictor,
    RephrasedQuestionSet, Rephraser, ResearchError, ResearchRequest, Researcher,
};
use std::sync::Arc;
use tracing::{info, Level};

/// Treats questions without a year as unpredictable
struct YearEvaluator;

#[async_trait]
impl Evaluator for YearEvaluator {
    async fn evaluate(&self, question: &str) -> EvaluatedQuestion {
        let has_year = question
            .split(|c: char| !c.is_ascii_digit())
            .any(|token| token.len() == 4);
        EvaluatedQuestion::new(question, has_year)
    }
}

/// Pretends to search, failing on very short questions
struct OfflineResearcher {
    label: &'static str,
}

#[async_trait]
impl Researcher for OfflineResearcher {
    async fn research(&self, request: &ResearchRequest) -> Result<String, ResearchError> {
        if request.question.split_whitespace().count() < 4 {
            return Err(ResearchError::InvalidInput(format!(
                "question too short to search: {}",
                request.question
            )));
        }
        Ok(format!(
            "[{} via {}] No decisive sources found for \"{}\".",
            self.label, request.model, request.question
        ))
    }
}

struct TemplateRephraser;

#[async_trait]
impl Rephraser for TemplateRephraser {
    async fn rephrase(&self, question: &str) -> RephrasedQuestionSet {
        let stem = question.trim_end_matches('?');
        RephrasedQuestionSet {
            original_question: question.to_string(),
            negated_question: format!("Is it false that {}?", stem.to_lowercase()),
            open_ended_question: format!("What will happen regarding: {}?", stem),
        }
    }
}

/// Leans towards "yes" the more research it gets
struct HeuristicPredictor;

#[async_trait]
impl Predictor for HeuristicPredictor {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionPrediction, PredictionError> {
        let evidence = (request.additional_information.len() as f64 / 1000.0).min(1.0);
        Ok(CompletionPrediction {
            p_yes: 0.5 + evidence * 0.3,
            confidence: 0.4 + evidence * 0.4,
            info_utility: evidence,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Benchmarked Prediction Agents - Example");
    info!("=======================================");

    // Step 1: Wire the collaborators
    let collaborators = Collaborators::new(Arc::new(HeuristicPredictor))
        .with_evaluator(Arc::new(YearEvaluator))
        .with_embedding_researcher(Arc::new(OfflineResearcher { label: "embedding" }))
        .with_iterative_researcher(Arc::new(OfflineResearcher { label: "iterative" }))
        .with_rephraser(Arc::new(TemplateRephraser));

    // Step 2: Build every agent from the default configuration
    let settings = AgentsConfig::default();
    let registry = AgentRegistry::from_config(collaborators, &settings);
    let agents = registry.build_all(&settings)?;
    info!("Built {} agents", agents.len());

    // Step 3: Run all agents on each question
    let questions = [
        "Will Bitcoin trade above $100,000 on December 31, 2025?",
        "Will it rain?",
    ];

    for question in questions {
        info!("\n=== {} ===\n", question);
        for run in run_agents(&agents, question).await {
            print_run(&run);
        }
    }

    // Step 4: Show the record format
    let sample = run_agents(&agents[..1], questions[0]).await;
    info!("\nExample AgentRun JSON:");
    info!("\n{}\n", serde_json::to_string_pretty(&sample[0])?);

    Ok(())
}

fn print_run(run: &AgentRun) {
    match &run.prediction.outcome_prediction {
        Some(outcome) => info!(
            "  {:<14} p_yes={:.2} confidence={:.2} info_utility={:.2} ({}ms)",
            run.agent_name, outcome.p_yes, outcome.confidence, outcome.info_utility, run.processing_time_ms
        ),
        None => info!(
            "  {:<14} no outcome, stopped after {}",
            run.agent_name, run.stopped_after
        ),
    }
}

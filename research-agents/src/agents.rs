//! Research-capable agents built by composition
//!
//! [`ResearchAgent`] is the single concrete agent for every LLM-backed
//! variant. The variants differ only in how they evaluate and which
//! research strategy they hold; prediction is shared.

use crate::agent::{AgentConfig, AgentStage, BenchmarkedAgent};
use crate::collaborators::{CompletionRequest, Evaluator, Predictor, Rephraser, Researcher};
use crate::mapper::ResultMapper;
use crate::rephrasing::RephrasingResearch;
use crate::strategy::{NoResearch, ResearchSource, ResearchStrategy, SingleSourceResearch};
use async_trait::async_trait;
use common::{EvaluatedQuestion, Prediction};
use std::sync::Arc;
use tracing::{debug, warn};

pub const QUESTION_ONLY_NAME: &str = "question-only";
pub const OLAS_NAME: &str = "olas";
pub const EVO_NAME: &str = "evo";
pub const REPHRASING_OLAS_NAME: &str = "reph-olas";

/// How an agent answers the evaluate stage
#[derive(Clone)]
pub enum EvaluationMode {
    /// Skip the evaluator and treat every question as predictable
    AssumePredictable,
    /// Ask the external evaluator
    Evaluator(Arc<dyn Evaluator>),
}

/// Agent with a pluggable research strategy
pub struct ResearchAgent {
    config: AgentConfig,
    evaluation: EvaluationMode,
    research: Arc<dyn ResearchStrategy>,
    predictor: Arc<dyn Predictor>,
    mapper: ResultMapper,
}

impl ResearchAgent {
    pub fn new(
        config: AgentConfig,
        evaluation: EvaluationMode,
        research: Arc<dyn ResearchStrategy>,
        predictor: Arc<dyn Predictor>,
        mapper: ResultMapper,
    ) -> Self {
        Self {
            config,
            evaluation,
            research,
            predictor,
            mapper,
        }
    }

    /// Predicts from the question alone
    pub fn question_only(
        config: AgentConfig,
        predictor: Arc<dyn Predictor>,
        mapper: ResultMapper,
    ) -> Self {
        Self::new(
            config,
            EvaluationMode::AssumePredictable,
            Arc::new(NoResearch),
            predictor,
            mapper,
        )
    }

    /// Researches with the embedding-based researcher
    ///
    /// Falls back to the default embedding model when the config has none.
    pub fn olas(
        mut config: AgentConfig,
        evaluator: Arc<dyn Evaluator>,
        researcher: Arc<dyn Researcher>,
        predictor: Arc<dyn Predictor>,
        mapper: ResultMapper,
    ) -> Self {
        let research = embedding_research(&mut config, researcher);
        Self::new(
            config,
            EvaluationMode::Evaluator(evaluator),
            Arc::new(research),
            predictor,
            mapper,
        )
    }

    /// Researches with the iterative researcher
    pub fn evo(
        config: AgentConfig,
        use_summaries: bool,
        evaluator: Arc<dyn Evaluator>,
        researcher: Arc<dyn Researcher>,
        predictor: Arc<dyn Predictor>,
        mapper: ResultMapper,
    ) -> Self {
        let research = SingleSourceResearch::new(
            config.agent_name.clone(),
            config.model.clone(),
            ResearchSource::Iterative { use_summaries },
            researcher,
        );
        Self::new(
            config,
            EvaluationMode::Evaluator(evaluator),
            Arc::new(research),
            predictor,
            mapper,
        )
    }

    /// Embedding-based research fanned out over three phrasings
    pub fn rephrasing_olas(
        mut config: AgentConfig,
        evaluator: Arc<dyn Evaluator>,
        researcher: Arc<dyn Researcher>,
        rephraser: Arc<dyn Rephraser>,
        predictor: Arc<dyn Predictor>,
        mapper: ResultMapper,
    ) -> Self {
        let inner = embedding_research(&mut config, researcher);
        let research = RephrasingResearch::new(Arc::new(inner), rephraser);
        Self::new(
            config,
            EvaluationMode::Evaluator(evaluator),
            Arc::new(research),
            predictor,
            mapper,
        )
    }
}

fn embedding_research(
    config: &mut AgentConfig,
    researcher: Arc<dyn Researcher>,
) -> SingleSourceResearch {
    let embedding_model = *config.embedding_model.get_or_insert_with(Default::default);
    SingleSourceResearch::new(
        config.agent_name.clone(),
        config.model.clone(),
        ResearchSource::Embedding(embedding_model),
        researcher,
    )
}

#[async_trait]
impl BenchmarkedAgent for ResearchAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn evaluate(&self, question: &str) -> EvaluatedQuestion {
        match &self.evaluation {
            EvaluationMode::AssumePredictable => EvaluatedQuestion::predictable(question),
            EvaluationMode::Evaluator(evaluator) => {
                let evaluated = evaluator.evaluate(question).await;
                debug!(
                    "{} {}: predictable = {}",
                    self.config.agent_name,
                    AgentStage::Evaluate,
                    evaluated.is_predictable
                );
                evaluated
            }
        }
    }

    async fn research(&self, question: &str) -> Option<String> {
        self.research.research(question).await
    }

    async fn predict(
        &self,
        question: &str,
        researched: &str,
        evaluated: &EvaluatedQuestion,
    ) -> Prediction {
        let request = CompletionRequest {
            prompt: question.to_string(),
            additional_information: researched.to_string(),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
        };

        let result = self
            .predictor
            .complete(&request)
            .await
            .and_then(|raw| self.mapper.map(&raw, Some(evaluated.clone())));

        match result {
            Ok(prediction) => prediction,
            Err(e) => {
                warn!("Error in {}'s {}: {}", self.config.agent_name, AgentStage::Predict, e);
                Prediction::evaluation_only(evaluated.clone())
            }
        }
    }
}

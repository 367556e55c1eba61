//! Pluggable research strategies
//!
//! An agent holds one strategy for its research stage. Strategies never
//! fail: a researcher error is logged and reported as "no research".

use crate::agent::EmbeddingModel;
use crate::collaborators::{ResearchRequest, Researcher};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Research stage of an agent
#[async_trait]
pub trait ResearchStrategy: Send + Sync {
    /// `None` signals a soft failure
    async fn research(&self, question: &str) -> Option<String>;
}

/// Strategy for agents that do not research
///
/// Always yields an empty report, never `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResearch;

#[async_trait]
impl ResearchStrategy for NoResearch {
    async fn research(&self, _question: &str) -> Option<String> {
        Some(String::new())
    }
}

/// Which family of researcher a strategy calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchSource {
    /// Embedding-based web research
    Embedding(EmbeddingModel),
    /// LLM-driven iterative research
    Iterative { use_summaries: bool },
}

/// One call to one researcher per question
pub struct SingleSourceResearch {
    agent_name: String,
    model: String,
    source: ResearchSource,
    researcher: Arc<dyn Researcher>,
}

impl SingleSourceResearch {
    pub fn new(
        agent_name: impl Into<String>,
        model: impl Into<String>,
        source: ResearchSource,
        researcher: Arc<dyn Researcher>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            model: model.into(),
            source,
            researcher,
        }
    }

    fn request(&self, question: &str) -> ResearchRequest {
        let (embedding_model, use_summaries) = match self.source {
            ResearchSource::Embedding(model) => (Some(model), false),
            ResearchSource::Iterative { use_summaries } => (None, use_summaries),
        };

        ResearchRequest {
            question: question.to_string(),
            model: self.model.clone(),
            embedding_model,
            use_summaries,
        }
    }
}

#[async_trait]
impl ResearchStrategy for SingleSourceResearch {
    async fn research(&self, question: &str) -> Option<String> {
        match self.researcher.research(&self.request(question)).await {
            Ok(report) => {
                debug!("{} research produced {} chars", self.agent_name, report.len());
                Some(report)
            }
            Err(e) => {
                warn!("Error in {}'s research: {}", self.agent_name, e);
                None
            }
        }
    }
}

//! Registry of benchmarked agent variants
//!
//! The harness iterates [`AgentKind::ALL`] or a configured list of
//! [`AgentSpec`]s and gets back trait objects; it never needs to know which
//! concrete agent it is running.

use crate::agent::{AgentConfig, BenchmarkedAgent};
use crate::agents::{
    ResearchAgent, EVO_NAME, OLAS_NAME, QUESTION_ONLY_NAME, REPHRASING_OLAS_NAME,
};
use crate::baselines::{FixedAgent, RandomAgent, FIXED_NAME, RANDOM_NAME};
use crate::collaborators::{Evaluator, Predictor, Rephraser, Researcher};
use crate::config::{AgentSpec, AgentsConfig};
use crate::mapper::ResultMapper;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Tag of every agent variant the registry can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    #[serde(rename = "olas")]
    Olas,
    #[serde(rename = "reph-olas")]
    RephrasingOlas,
    #[serde(rename = "evo")]
    Evo,
    #[serde(rename = "random")]
    Random,
    #[serde(rename = "question-only")]
    QuestionOnly,
    #[serde(rename = "fixed")]
    Fixed,
}

impl AgentKind {
    pub const ALL: [AgentKind; 6] = [
        AgentKind::Olas,
        AgentKind::RephrasingOlas,
        AgentKind::Evo,
        AgentKind::Random,
        AgentKind::QuestionOnly,
        AgentKind::Fixed,
    ];

    /// Agent name used when the configuration does not give one
    pub fn default_name(&self) -> &'static str {
        match self {
            AgentKind::Olas => OLAS_NAME,
            AgentKind::RephrasingOlas => REPHRASING_OLAS_NAME,
            AgentKind::Evo => EVO_NAME,
            AgentKind::Random => RANDOM_NAME,
            AgentKind::QuestionOnly => QUESTION_ONLY_NAME,
            AgentKind::Fixed => FIXED_NAME,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

impl FromStr for AgentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        AgentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.default_name() == s)
            .ok_or_else(|| anyhow!("Unknown agent kind: {}", s))
    }
}

/// External collaborators shared by the agents a registry builds
///
/// Only the predictor is required; the others are checked when an agent
/// that needs them is built.
#[derive(Clone)]
pub struct Collaborators {
    pub predictor: Arc<dyn Predictor>,
    pub evaluator: Option<Arc<dyn Evaluator>>,
    pub embedding_researcher: Option<Arc<dyn Researcher>>,
    pub iterative_researcher: Option<Arc<dyn Researcher>>,
    pub rephraser: Option<Arc<dyn Rephraser>>,
}

impl Collaborators {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            predictor,
            evaluator: None,
            embedding_researcher: None,
            iterative_researcher: None,
            rephraser: None,
        }
    }

    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn with_embedding_researcher(mut self, researcher: Arc<dyn Researcher>) -> Self {
        self.embedding_researcher = Some(researcher);
        self
    }

    pub fn with_iterative_researcher(mut self, researcher: Arc<dyn Researcher>) -> Self {
        self.iterative_researcher = Some(researcher);
        self
    }

    pub fn with_rephraser(mut self, rephraser: Arc<dyn Rephraser>) -> Self {
        self.rephraser = Some(rephraser);
        self
    }

    fn evaluator(&self, kind: AgentKind) -> Result<Arc<dyn Evaluator>> {
        self.evaluator
            .clone()
            .ok_or_else(|| anyhow!("{} agent requires an evaluator", kind))
    }

    fn embedding_researcher(&self, kind: AgentKind) -> Result<Arc<dyn Researcher>> {
        self.embedding_researcher
            .clone()
            .ok_or_else(|| anyhow!("{} agent requires an embedding researcher", kind))
    }

    fn iterative_researcher(&self, kind: AgentKind) -> Result<Arc<dyn Researcher>> {
        self.iterative_researcher
            .clone()
            .ok_or_else(|| anyhow!("{} agent requires an iterative researcher", kind))
    }

    fn rephraser(&self, kind: AgentKind) -> Result<Arc<dyn Rephraser>> {
        self.rephraser
            .clone()
            .ok_or_else(|| anyhow!("{} agent requires a rephraser", kind))
    }
}

/// Builds agents from their tag and configuration
pub struct AgentRegistry {
    collaborators: Collaborators,
    mapper: ResultMapper,
}

impl AgentRegistry {
    pub fn new(collaborators: Collaborators, mapper: ResultMapper) -> Self {
        Self {
            collaborators,
            mapper,
        }
    }

    /// Registry using the out-of-range policy from `settings`
    pub fn from_config(collaborators: Collaborators, settings: &AgentsConfig) -> Self {
        Self::new(collaborators, ResultMapper::new(settings.outcome_range))
    }

    /// Build one agent
    pub fn build(&self, spec: &AgentSpec, config: AgentConfig) -> Result<Box<dyn BenchmarkedAgent>> {
        let kind = spec.kind;
        let c = &self.collaborators;

        let agent: Box<dyn BenchmarkedAgent> = match kind {
            AgentKind::QuestionOnly => Box::new(ResearchAgent::question_only(
                config,
                c.predictor.clone(),
                self.mapper,
            )),
            AgentKind::Olas => Box::new(ResearchAgent::olas(
                config,
                c.evaluator(kind)?,
                c.embedding_researcher(kind)?,
                c.predictor.clone(),
                self.mapper,
            )),
            AgentKind::Evo => Box::new(ResearchAgent::evo(
                config,
                spec.use_summaries,
                c.evaluator(kind)?,
                c.iterative_researcher(kind)?,
                c.predictor.clone(),
                self.mapper,
            )),
            AgentKind::RephrasingOlas => Box::new(ResearchAgent::rephrasing_olas(
                config,
                c.evaluator(kind)?,
                c.embedding_researcher(kind)?,
                c.rephraser(kind)?,
                c.predictor.clone(),
                self.mapper,
            )),
            AgentKind::Random => Box::new(RandomAgent::new(config)),
            AgentKind::Fixed => {
                let fixed_answer = spec
                    .fixed_answer
                    .ok_or_else(|| anyhow!("fixed agent requires `fixed_answer`"))?;
                Box::new(FixedAgent::new(config, fixed_answer))
            }
        };

        Ok(agent)
    }

    /// Build every agent listed in `settings`, in order
    pub fn build_all(&self, settings: &AgentsConfig) -> Result<Vec<Box<dyn BenchmarkedAgent>>> {
        settings.validate()?;

        let mut agents = Vec::with_capacity(settings.agents.len());
        let mut names = HashSet::new();

        for spec in &settings.agents {
            let config = settings.resolve(spec);
            let name = config.agent_name.clone();
            if !names.insert(name.clone()) {
                return Err(anyhow!("Duplicate agent name: {}", name));
            }

            let agent = self
                .build(spec, config)
                .with_context(|| format!("Failed to build agent {}", name))?;
            info!("Registered agent {} ({}) on model {}", name, spec.kind, agent.config().model);
            agents.push(agent);
        }

        Ok(agents)
    }
}

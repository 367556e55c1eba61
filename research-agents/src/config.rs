//! Agent benchmark configuration
//!
//! Loaded from a TOML file with `AGENTS_`-prefixed environment overrides,
//! e.g. `AGENTS_DEFAULT_MODEL=gpt-4o` or `AGENTS_OUTCOME_RANGE=reject`.

use crate::agent::{AgentConfig, EmbeddingModel};
use crate::mapper::OutcomeRangePolicy;
use crate::registry::AgentKind;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the whole set of benchmarked agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// Model used by agents that do not name their own
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Sampling temperature used by agents that do not set their own
    #[serde(default)]
    pub default_temperature: f64,

    /// Worker-count hint passed through to every agent
    #[serde(default)]
    pub max_workers: Option<usize>,

    /// Handling of completion values outside [0, 1]
    #[serde(default)]
    pub outcome_range: OutcomeRangePolicy,

    /// Agents to build, in benchmark order
    #[serde(default = "default_agents")]
    pub agents: Vec<AgentSpec>,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            default_temperature: 0.0,
            max_workers: None,
            outcome_range: OutcomeRangePolicy::default(),
            agents: default_agents(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo-0125".to_string()
}

fn default_agents() -> Vec<AgentSpec> {
    AgentKind::ALL
        .iter()
        .map(|kind| AgentSpec {
            fixed_answer: (*kind == AgentKind::Fixed).then_some(true),
            ..AgentSpec::new(*kind)
        })
        .collect()
}

/// One configured agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub kind: AgentKind,

    #[serde(default)]
    pub agent_name: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default)]
    pub max_workers: Option<usize>,

    /// Embedding backend for `olas` and `reph-olas`
    #[serde(default)]
    pub embedding_model: Option<EmbeddingModel>,

    /// Summarise intermediate results during iterative research (`evo`)
    #[serde(default)]
    pub use_summaries: bool,

    /// Answer of the `fixed` baseline
    #[serde(default)]
    pub fixed_answer: Option<bool>,
}

impl AgentSpec {
    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            agent_name: None,
            model: None,
            temperature: None,
            max_workers: None,
            embedding_model: None,
            use_summaries: false,
            fixed_answer: None,
        }
    }
}

impl AgentsConfig {
    /// Load from a TOML file, then apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .add_source(::config::Environment::with_prefix("AGENTS").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read agent config {}", path.display()))?;

        let parsed: Self = settings
            .try_deserialize()
            .context("Failed to parse agent config")?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Parse from an in-memory TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let parsed: Self = toml::from_str(raw).context("Failed to parse agent config")?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        check_temperature("default_temperature", self.default_temperature)?;
        if self.max_workers == Some(0) {
            return Err(anyhow!("max_workers must be at least 1"));
        }

        for spec in &self.agents {
            if let Some(temperature) = spec.temperature {
                check_temperature(spec.kind.default_name(), temperature)?;
            }
            if spec.max_workers == Some(0) {
                return Err(anyhow!("{}: max_workers must be at least 1", spec.kind));
            }
        }

        Ok(())
    }

    /// Fill the gaps of `spec` with the global defaults
    pub fn resolve(&self, spec: &AgentSpec) -> AgentConfig {
        let name = spec
            .agent_name
            .clone()
            .unwrap_or_else(|| spec.kind.default_name().to_string());
        let model = spec
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        let mut config = AgentConfig::new(name, model)
            .with_temperature(spec.temperature.unwrap_or(self.default_temperature))
            .with_max_workers(spec.max_workers.or(self.max_workers));
        if let Some(embedding_model) = spec.embedding_model {
            config = config.with_embedding_model(embedding_model);
        }
        config
    }
}

fn check_temperature(what: &str, temperature: f64) -> Result<()> {
    if !temperature.is_finite() || temperature < 0.0 {
        return Err(anyhow!("{}: invalid temperature {}", what, temperature));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_lists_every_kind() {
        let config = AgentsConfig::default();
        let kinds: Vec<AgentKind> = config.agents.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, AgentKind::ALL.to_vec());
        assert_eq!(config.outcome_range, OutcomeRangePolicy::PassThrough);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = AgentsConfig::from_toml_str(
            r#"
            default_model = "gpt-4"
            max_workers = 8
            outcome_range = "clamp"

            [[agents]]
            kind = "evo"
            use_summaries = true
            temperature = 0.5

            [[agents]]
            kind = "reph-olas"
            agent_name = "reph-olas-openai"
            embedding_model = "openai"
            "#,
        )
        .unwrap();

        assert_eq!(config.outcome_range, OutcomeRangePolicy::Clamp);
        assert_eq!(config.agents.len(), 2);
        assert!(config.agents[0].use_summaries);

        let evo = config.resolve(&config.agents[0]);
        assert_eq!(evo.agent_name, "evo");
        assert_eq!(evo.model, "gpt-4");
        assert_eq!(evo.temperature, 0.5);
        assert_eq!(evo.max_workers, Some(8));

        let reph = config.resolve(&config.agents[1]);
        assert_eq!(reph.agent_name, "reph-olas-openai");
        assert_eq!(reph.temperature, 0.0);
        assert_eq!(reph.embedding_model, Some(EmbeddingModel::Openai));
    }

    #[test]
    fn test_missing_agents_uses_defaults() {
        let config = AgentsConfig::from_toml_str("default_model = \"gpt-4\"").unwrap();
        assert_eq!(config.agents.len(), AgentKind::ALL.len());
    }

    #[test]
    fn test_rejects_negative_temperature() {
        let err = AgentsConfig::from_toml_str(
            r#"
            [[agents]]
            kind = "olas"
            temperature = -1.0
            "#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("invalid temperature"));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(AgentsConfig::from_toml_str("[[agents]]\nkind = \"oracle\"").is_err());
    }

    #[test]
    fn test_load_file_with_env_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("agents.toml");
        std::fs::write(
            &path,
            r#"
            default_model = "gpt-4"
            outcome_range = "pass_through"

            [[agents]]
            kind = "evo"
            use_summaries = true

            [[agents]]
            kind = "fixed"
            fixed_answer = false
            "#,
        )
        .unwrap();

        std::env::set_var("AGENTS_OUTCOME_RANGE", "reject");
        std::env::set_var("AGENTS_DEFAULT_MODEL", "gpt-4o");
        let loaded = AgentsConfig::load(&path);
        std::env::remove_var("AGENTS_OUTCOME_RANGE");
        std::env::remove_var("AGENTS_DEFAULT_MODEL");

        let config = loaded.unwrap();
        assert_eq!(config.default_model, "gpt-4o");
        assert_eq!(config.outcome_range, OutcomeRangePolicy::Reject);

        let kinds: Vec<AgentKind> = config.agents.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![AgentKind::Evo, AgentKind::Fixed]);
        assert!(config.agents[0].use_summaries);
        assert_eq!(config.agents[1].fixed_answer, Some(false));
        assert_eq!(config.resolve(&config.agents[0]).model, "gpt-4o");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AgentsConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read agent config"));
    }

    #[test]
    fn test_rejects_zero_workers() {
        assert!(AgentsConfig::from_toml_str("max_workers = 0").is_err());
    }
}

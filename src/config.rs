use crate::agents::registry::DEFAULT_AGENT;
use crate::cli::Cli;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Verbose mode - debug logging on stderr (not stored in config file)
    #[serde(skip)]
    pub verbose: bool,
}

/// How the external hosting framework is invoked in the usage banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_launcher")]
    pub launcher: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            launcher: default_launcher(),
            port: default_port(),
        }
    }
}

fn default_launcher() -> String {
    "uv run adk".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_agent")]
    pub agent: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            agent: default_agent(),
        }
    }
}

fn default_agent() -> String {
    DEFAULT_AGENT.to_string()
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Config file given with --config
    /// 3. Built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file
    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply CLI flag overrides (CLI has highest precedence)
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(port) = cli.port {
            self.runner.port = port;
        }
        if let Some(ref agent) = cli.agent {
            self.defaults.agent = agent.clone();
        }
        self.verbose = cli.verbose;
        self
    }
}

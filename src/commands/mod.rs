pub mod info;
pub mod list;
pub mod run;

use crate::agents::{AgentDefinition, AgentRegistry};
use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The agent a command operates on, with the file it was defined in.
#[derive(Debug, Clone)]
pub struct SelectedAgent {
    pub definition: Arc<AgentDefinition>,
    pub definition_file: PathBuf,
}

/// Resolve the agent for this invocation: an explicit definition file wins,
/// otherwise the configured registry id.
pub fn select_agent(
    registry: &AgentRegistry,
    config: &Config,
    agent_file: Option<&Path>,
) -> Result<SelectedAgent> {
    if let Some(path) = agent_file {
        let definition = AgentDefinition::from_file(path)?;
        tracing::debug!(path = %path.display(), "using agent definition file");
        return Ok(SelectedAgent {
            definition: Arc::new(definition),
            definition_file: path.to_path_buf(),
        });
    }

    let id = config.defaults.agent.as_str();
    Ok(SelectedAgent {
        definition: registry.require(id)?,
        definition_file: AgentRegistry::source_path(id),
    })
}

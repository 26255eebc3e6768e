//! Registry of the agent definitions embedded in the binary.

use super::definition::AgentDefinition;
use crate::error::{AgentError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Directory holding one sub-directory per agent, relative to the crate root.
pub const AGENTS_DIR: &str = "agents";

/// File name of a definition inside an agent directory.
pub const AGENT_FILE: &str = "agent.toml";

/// Id of the agent used when none is configured.
pub const DEFAULT_AGENT: &str = "hello";

const EMBEDDED: &[(&str, &str)] = &[("hello", include_str!("../../agents/hello/agent.toml"))];

/// Registry of available agents
pub struct AgentRegistry {
    agents: HashMap<String, Arc<AgentDefinition>>,
}

impl AgentRegistry {
    /// Parse and validate every embedded agent definition
    pub fn load() -> Result<Self> {
        let mut agents = HashMap::new();

        for (id, content) in EMBEDDED {
            let definition = load_embedded(id, content)?;
            agents.insert(id.to_string(), Arc::new(definition));
        }

        tracing::debug!(count = agents.len(), "agent registry loaded");
        Ok(Self { agents })
    }

    /// Get an agent by ID
    pub fn get(&self, id: &str) -> Option<Arc<AgentDefinition>> {
        self.agents.get(id).cloned()
    }

    /// Get an agent by ID, failing with the list of known ids
    pub fn require(&self, id: &str) -> Result<Arc<AgentDefinition>> {
        self.get(id).ok_or_else(|| {
            AgentError::InvalidConfig(format!(
                "Unknown agent '{}'. Available agents: {}",
                id,
                self.list_available().join(", ")
            ))
        })
    }

    /// List all available agent IDs
    pub fn list_available(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.agents.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Path of an agent's definition file, as laid out in the source tree
    pub fn source_path(id: &str) -> PathBuf {
        PathBuf::from(AGENTS_DIR).join(id).join(AGENT_FILE)
    }
}

fn load_embedded(id: &str, content: &str) -> Result<AgentDefinition> {
    AgentDefinition::from_toml_str(content).map_err(|e| {
        AgentError::InvalidConfig(format!("Failed to load {} agent definition: {}", id, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::definition::GOOGLE_SEARCH;

    #[test]
    fn test_load_agents() {
        let registry = AgentRegistry::load().unwrap();
        assert!(registry.get("hello").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_list_available() {
        let registry = AgentRegistry::load().unwrap();
        assert_eq!(registry.list_available(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_hello_agent_structure() {
        let registry = AgentRegistry::load().unwrap();
        let hello = registry.get(DEFAULT_AGENT).unwrap();
        assert_eq!(hello.name(), "hello_agent");
        assert_eq!(hello.model(), "gemini-2.0-flash");
        assert!(hello.instruction().contains("concise assistant"));
        assert_eq!(hello.tools().len(), 1);
        assert_eq!(hello.tools()[0].id(), GOOGLE_SEARCH);
    }

    #[test]
    fn test_require_unknown_lists_available() {
        let registry = AgentRegistry::load().unwrap();
        let err = registry.require("missing").unwrap_err();
        assert!(matches!(err, AgentError::InvalidConfig(_)));
        assert!(err.to_string().contains("Available agents: hello"));
    }

    #[test]
    fn test_malformed_embedded_definition() {
        let err = load_embedded("broken", "[agent]\nmodel = \"m\"\n").unwrap_err();
        assert!(matches!(err, AgentError::InvalidConfig(_)));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_source_path() {
        assert_eq!(
            AgentRegistry::source_path("hello"),
            PathBuf::from("agents/hello/agent.toml")
        );
    }
}

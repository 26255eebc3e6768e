//! The agent definition record and its TOML representation.

use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Identifier of the web search tool supplied by the hosting framework.
pub const GOOGLE_SEARCH: &str = "google_search";

/// Opaque reference to a callable capability implemented by the hosting
/// framework. Only the identifier is known here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolRef(String);

impl ToolRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToolRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A named conversational agent, ready to hand to the hosting framework.
///
/// Built once and never mutated; fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentDefinition {
    name: String,
    model: String,
    instruction: String,
    description: String,
    tools: Vec<ToolRef>,
}

impl AgentDefinition {
    /// Construct a definition. `name` and `instruction` must contain
    /// something other than whitespace; the model id and tool list are
    /// passed through untouched.
    pub fn new<I>(
        name: impl Into<String>,
        model: impl Into<String>,
        instruction: impl Into<String>,
        description: impl Into<String>,
        tools: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = ToolRef>,
    {
        let definition = Self {
            name: name.into(),
            model: model.into(),
            instruction: instruction.into(),
            description: description.into(),
            tools: tools.into_iter().collect(),
        };

        require_non_empty("name", &definition.name)?;
        require_non_empty("instruction", &definition.instruction)?;

        tracing::debug!(
            name = %definition.name,
            model = %definition.model,
            tools = definition.tools.len(),
            "agent definition constructed"
        );

        Ok(definition)
    }

    /// Start a builder with empty description and no tools.
    pub fn builder(
        name: impl Into<String>,
        model: impl Into<String>,
        instruction: impl Into<String>,
    ) -> AgentDefinitionBuilder {
        AgentDefinitionBuilder {
            name: name.into(),
            model: model.into(),
            instruction: instruction.into(),
            description: String::new(),
            tools: Vec::new(),
        }
    }

    /// Parse and validate a definition from TOML text. Wrongly typed
    /// fields are reported as invalid arguments, like missing ones.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: AgentToml = toml::from_str(content).map_err(|e| {
            AgentError::InvalidArgument(format!("malformed agent definition: {}", e))
        })?;
        Self::try_from(parsed)
    }

    /// Load a definition from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tools(&self) -> &[ToolRef] {
        &self.tools
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgentError::InvalidArgument(format!(
            "agent {} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Builder for [`AgentDefinition`]; validation happens in `build`.
#[derive(Debug, Clone)]
pub struct AgentDefinitionBuilder {
    name: String,
    model: String,
    instruction: String,
    description: String,
    tools: Vec<ToolRef>,
}

impl AgentDefinitionBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tool(mut self, tool: impl Into<ToolRef>) -> Self {
        self.tools.push(tool.into());
        self
    }

    pub fn build(self) -> Result<AgentDefinition> {
        AgentDefinition::new(
            self.name,
            self.model,
            self.instruction,
            self.description,
            self.tools,
        )
    }
}

/// On-disk shape of an agent TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentToml {
    #[serde(default)]
    pub agent: AgentMeta,
}

/// The `[agent]` table. Required fields are optional here so that a
/// missing value is reported as an invalid argument, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentMeta {
    pub name: Option<String>,
    pub model: Option<String>,
    pub instruction: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tools: Vec<ToolRef>,
}

impl TryFrom<AgentToml> for AgentDefinition {
    type Error = AgentError;

    fn try_from(parsed: AgentToml) -> Result<Self> {
        let meta = parsed.agent;
        let name = meta.name.ok_or_else(|| missing("name"))?;
        let model = meta.model.ok_or_else(|| missing("model"))?;
        let instruction = meta.instruction.ok_or_else(|| missing("instruction"))?;

        AgentDefinition::new(name, model, instruction, meta.description, meta.tools)
    }
}

fn missing(field: &str) -> AgentError {
    AgentError::InvalidArgument(format!("agent {} is required", field))
}

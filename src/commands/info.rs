use crate::agents::AgentDefinition;
use crate::error::Result;
use std::io::Write;
use std::path::Path;

pub fn execute<W: Write>(
    agent: &AgentDefinition,
    definition_file: &Path,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(agent)?)?;
        return Ok(());
    }

    let description = if agent.description().is_empty() {
        "(no description)"
    } else {
        agent.description()
    };
    let tools = if agent.tools().is_empty() {
        "(none)".to_string()
    } else {
        agent
            .tools()
            .iter()
            .map(|tool| tool.id())
            .collect::<Vec<_>>()
            .join(", ")
    };

    writeln!(out, "Agent Information:")?;
    writeln!(out, "  Name: {}", agent.name())?;
    writeln!(out, "  Model: {}", agent.model())?;
    writeln!(out, "  Description: {}", description)?;
    writeln!(out, "  Tools: {}", tools)?;
    writeln!(out, "  Source: {}", definition_file.display())?;

    writeln!(out, "\nInstruction:")?;
    for line in agent.instruction().lines() {
        writeln!(out, "  {}", line)?;
    }

    Ok(())
}

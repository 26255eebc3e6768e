use crate::agents::AgentRegistry;
use crate::error::Result;
use std::io::Write;

pub fn execute<W: Write>(registry: &AgentRegistry, default_id: &str, out: &mut W) -> Result<()> {
    let ids = registry.list_available();
    if ids.is_empty() {
        writeln!(out, "No agents available.")?;
        return Ok(());
    }

    writeln!(out, "Available agents:")?;
    for id in ids {
        let Some(agent) = registry.get(&id) else {
            continue;
        };
        let marker = if id == default_id { " (default)" } else { "" };
        writeln!(out, "  {}{} - {}", id, marker, agent.name())?;
    }

    Ok(())
}

use crate::agents::AgentDefinition;
use crate::config::RunnerConfig;
use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the agent lives and how the hosting framework is invoked on it.
#[derive(Debug, Clone)]
pub struct Banner {
    launcher: String,
    port: u16,
    definition_file: PathBuf,
}

impl Banner {
    pub fn new(runner: &RunnerConfig, definition_file: impl Into<PathBuf>) -> Self {
        Self {
            launcher: runner.launcher.clone(),
            port: runner.port,
            definition_file: definition_file.into(),
        }
    }

    /// Directory the framework is pointed at
    fn agent_dir(&self) -> &Path {
        match self.definition_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

/// Print the usage banner, then `Agent name: <name>` as the last line.
pub fn execute<W: Write>(agent: &AgentDefinition, banner: &Banner, out: &mut W) -> Result<()> {
    let dir = banner.agent_dir().display();

    writeln!(
        out,
        "Starter agent is defined in {} as `{}`.\n\
         Run it with: {} run {}\n\
         To experiment with a web UI: {} web {} --port {}",
        banner.definition_file.display(),
        agent.name(),
        banner.launcher,
        dir,
        banner.launcher,
        dir,
        banner.port
    )?;
    writeln!(out, "Agent name: {}", agent.name())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{AgentRegistry, ToolRef, GOOGLE_SEARCH};

    fn render(agent: &AgentDefinition, banner: &Banner) -> String {
        let mut out = Vec::new();
        execute(agent, banner, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn default_banner() -> Banner {
        Banner::new(&RunnerConfig::default(), "agents/hello/agent.toml")
    }

    #[test]
    fn test_default_output() {
        let registry = AgentRegistry::load().unwrap();
        let hello = registry.get("hello").unwrap();
        let output = render(&hello, &default_banner());

        assert_eq!(
            output,
            "Starter agent is defined in agents/hello/agent.toml as `hello_agent`.\n\
             Run it with: uv run adk run agents/hello\n\
             To experiment with a web UI: uv run adk web agents/hello --port 8080\n\
             Agent name: hello_agent\n"
        );
    }

    #[test]
    fn test_last_line_is_agent_name() {
        let agent = AgentDefinition::new(
            "hello_agent",
            "gemini-2.0-flash",
            "You are a concise assistant...",
            "Starter agent...",
            vec![ToolRef::new(GOOGLE_SEARCH)],
        )
        .unwrap();
        let output = render(&agent, &default_banner());
        assert_eq!(output.lines().last(), Some("Agent name: hello_agent"));
    }

    #[test]
    fn test_idempotent() {
        let agent = AgentDefinition::builder("hello_agent", "m", "i").build().unwrap();
        let banner = default_banner();
        assert_eq!(render(&agent, &banner), render(&agent, &banner));
    }

    #[test]
    fn test_tools_not_echoed() {
        let banner = default_banner();
        let without = AgentDefinition::builder("hello_agent", "m", "i").build().unwrap();
        let with = AgentDefinition::builder("hello_agent", "m", "i")
            .tool("secret_tool")
            .build()
            .unwrap();

        assert_eq!(render(&without, &banner), render(&with, &banner));
        assert!(!render(&with, &banner).contains("secret_tool"));
    }

    #[test]
    fn test_mentions_run_and_web() {
        let agent = AgentDefinition::builder("a", "m", "i").build().unwrap();
        let runner = RunnerConfig {
            launcher: "adk".to_string(),
            port: 3000,
        };
        let output = render(&agent, &Banner::new(&runner, "agents/a/agent.toml"));
        assert!(output.contains("adk run agents/a"));
        assert!(output.contains("adk web agents/a --port 3000"));
    }

    #[test]
    fn test_bare_file_name_uses_current_dir() {
        let agent = AgentDefinition::builder("a", "m", "i").build().unwrap();
        let output = render(&agent, &Banner::new(&RunnerConfig::default(), "agent.toml"));
        assert!(output.contains("Run it with: uv run adk run .\n"));
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diarlies-agent")]
#[command(about = "Starter agent definition for the Diarlies assistant", long_about = None)]
#[command(version = crate::version::VERSION)]
#[command(after_help = "\
INVOCATION PATTERNS:
  The 'run' command is the default. These are equivalent:

  diarlies-agent                     Print usage and the agent name
  diarlies-agent run                 Explicit run command

EXAMPLES:
  diarlies-agent --port 9000         Show the web UI command on port 9000
  diarlies-agent info --json         Dump the agent definition as JSON
  diarlies-agent --agent-file my.toml info
                                     Inspect a definition from disk")]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Built-in agent to use (default: hello)
    #[arg(long, global = true, value_name = "ID")]
    pub agent: Option<String>,

    /// Load the agent definition from a TOML file instead (takes precedence over --agent)
    #[arg(long = "agent-file", global = true, value_name = "FILE")]
    pub agent_file: Option<PathBuf>,

    /// Port shown for the web UI command (default: 8080)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print how to run or serve the agent, followed by its name
    Run,

    /// Show every field of the agent definition
    Info {
        /// Print the definition as JSON
        #[arg(long)]
        json: bool,
    },

    /// List built-in agents
    List,
}

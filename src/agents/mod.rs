//! Agent definitions handed to the external hosting framework.
//!
//! An agent bundles a model target, an instruction, a description and the
//! tools it may call. Built-in agents live as TOML files under `agents/`
//! and are embedded into the binary.
//!
//! # Example
//!
//! ```toml
//! [agent]
//! name = "hello_agent"
//! model = "gemini-2.0-flash"
//! instruction = "You are a concise assistant for Diarlies. Prefer short answers."
//! description = "Starter agent with Google Search available."
//! tools = ["google_search"]
//! ```

pub mod definition;
pub mod registry;

pub use definition::{AgentDefinition, AgentDefinitionBuilder, ToolRef, GOOGLE_SEARCH};
pub use registry::AgentRegistry;

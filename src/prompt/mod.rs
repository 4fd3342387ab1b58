//! Prompt assembly for the coding agent.
//!
//! This module provides:
//!
//! - **System prompt**: role, output rules, tips and API sections as one string
//! - **Task / chat prompts**: the user's turn with environment context and constraints
//! - **Results / MCP prompts**: execution and tool output fed back to the model
//! - **Template**: the `{placeholder}` engine behind the fixed texts
//!
//! Record prompts are plain `Serialize` structs. Field declaration order is the
//! key order in the JSON sent to the model, so reordering fields changes the
//! prompt.
//!
//! ```
//! use aiprompt::prompt::build_chat_prompt;
//!
//! let prompt = build_chat_prompt("now add a legend", "Plot a sine wave");
//! let json = serde_json::to_string(&prompt).unwrap();
//! assert!(json.starts_with(r#"{"message":"now add a legend","source":"User","context""#));
//! ```

mod api;
mod builder;
mod env;
mod feedback;
mod system;
mod task;
mod template;
pub mod templates;
mod tips;


use thiserror::Error;

pub use api::{ApiSpec, render_api_info};
pub use builder::PromptBuilder;
pub use env::{Environment, HostInfo, ProcessEnv, UNKNOWN};
pub use feedback::{McpResultPrompt, ResultsPrompt, build_mcp_result_prompt, build_results_prompt};
pub use system::build_system_prompt;
pub use task::{
    ChatConstraints, ChatContext, ChatPrompt, TaskConstraints, TaskContext, TaskPrompt,
    build_chat_prompt, build_task_prompt,
};
pub use template::{TemplateError, render_template, vars};
pub use tips::{Tip, Tips};

/// `source` of prompts that carry user input.
pub const SOURCE_USER: &str = "User";

/// Errors from prompt assembly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// No user prompt was given and the tips carry no role to fall back on.
    #[error("no role available: pass a user prompt or provide a role in the tips")]
    MissingRole,

    #[error(transparent)]
    Template(#[from] TemplateError),
}

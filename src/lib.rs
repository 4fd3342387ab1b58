//! aiprompt: prompt assembly for an LLM-driven coding agent.
//!
//! The [`prompt`] module holds the five builders (system, task, results,
//! chat, MCP tool result). [`config`] loads `aiprompt.yaml`, and the CLI
//! modules print prompts from the command line.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_support;

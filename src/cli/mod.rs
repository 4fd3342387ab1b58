//! CLI argument parsing for aiprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aiprompt: build the prompts a coding agent sends to its model.
///
/// Record prompts (task, results, chat, mcp-result) are printed as JSON with
/// keys in the order the model sees them. The system prompt is printed as text.
#[derive(Parser, Debug)]
#[command(name = "aiprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./aiprompt.yaml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for aiprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the system prompt.
    ///
    /// Uses the role and tips from the configured tips file unless a user
    /// prompt is given.
    System(SystemArgs),

    /// Print the prompt for a new task.
    Task(TaskArgs),

    /// Print the prompt that feeds code block execution results back.
    ///
    /// Reads a JSON array of results from --input or stdin.
    Results(InputArgs),

    /// Print the prompt for a follow-up message.
    Chat(ChatArgs),

    /// Print the prompt that feeds an MCP tool result back.
    ///
    /// Reads any JSON value from --input or stdin.
    McpResult(InputArgs),
}

#[derive(clap::Args, Debug)]
pub struct SystemArgs {
    /// Role prompt replacing the configured role; also drops the tips section.
    #[arg(short, long)]
    pub user_prompt: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct TaskArgs {
    /// The task instruction.
    pub instruction: String,

    /// GUI mode: omit terminal variables and add the matplotlib constraint.
    #[arg(long)]
    pub gui: bool,
}

#[derive(clap::Args, Debug)]
pub struct ChatArgs {
    /// The follow-up message.
    pub message: String,

    /// The task the conversation started with.
    #[arg(short, long)]
    pub task: String,
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON file to read; stdin when omitted or `-`.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

//! Command implementations for aiprompt.
//!
//! `dispatch` resolves the config and environment once, then `execute` turns
//! a command into the text to print. `execute` takes its environment and
//! stdin as arguments so it can be tested without touching the process.

mod input;

use crate::cli::{ChatArgs, Cli, Command, InputArgs, SystemArgs, TaskArgs};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::prompt::{Environment, ProcessEnv, PromptBuilder};
use serde::Serialize;
use std::io::Read;
use tracing::debug;

pub use input::{expect_array, read_json_input};

/// Dispatch a command to its implementation and print the prompt.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        AppError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;
    let builder = PromptBuilder::from_config(&config, ProcessEnv)?;

    let output = execute(&builder, cli.command, cli.compact, std::io::stdin().lock())?;
    println!("{}", output);
    Ok(())
}

/// Build the prompt for `command` and render it for printing.
pub fn execute<E: Environment>(
    builder: &PromptBuilder<E>,
    command: Command,
    compact: bool,
    stdin: impl Read,
) -> Result<String> {
    match command {
        Command::System(args) => cmd_system(builder, args),
        Command::Task(args) => cmd_task(builder, args, compact),
        Command::Results(args) => cmd_results(builder, args, compact, stdin),
        Command::Chat(args) => cmd_chat(builder, args, compact),
        Command::McpResult(args) => cmd_mcp_result(builder, args, compact, stdin),
    }
}

fn cmd_system<E: Environment>(builder: &PromptBuilder<E>, args: SystemArgs) -> Result<String> {
    let user_prompt = args.user_prompt.as_deref().or(builder.user_prompt.as_deref());
    let prompt = crate::prompt::build_system_prompt(&builder.tips, &builder.api_info, user_prompt)?;
    Ok(prompt)
}

fn cmd_task<E: Environment>(
    builder: &PromptBuilder<E>,
    args: TaskArgs,
    compact: bool,
) -> Result<String> {
    let gui = args.gui || builder.gui;
    debug!(gui, "building task prompt");
    let prompt = crate::prompt::build_task_prompt(&args.instruction, gui, &builder.host, builder.env());
    to_json(&prompt, compact)
}

fn cmd_results<E: Environment>(
    builder: &PromptBuilder<E>,
    args: InputArgs,
    compact: bool,
    stdin: impl Read,
) -> Result<String> {
    let results = expect_array(read_json_input(args.input.as_deref(), stdin)?)?;
    debug!(count = results.len(), "building results prompt");
    to_json(&builder.results_prompt(results), compact)
}

fn cmd_chat<E: Environment>(
    builder: &PromptBuilder<E>,
    args: ChatArgs,
    compact: bool,
) -> Result<String> {
    to_json(&builder.chat_prompt(&args.message, &args.task), compact)
}

fn cmd_mcp_result<E: Environment>(
    builder: &PromptBuilder<E>,
    args: InputArgs,
    compact: bool,
    stdin: impl Read,
) -> Result<String> {
    let result = read_json_input(args.input.as_deref(), stdin)?;
    to_json(&builder.mcp_result_prompt(result), compact)
}

/// Serialize a record prompt, keeping field order.
pub fn to_json<T: Serialize>(prompt: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(prompt)
    } else {
        serde_json::to_string_pretty(prompt)
    };
    rendered.map_err(|e| AppError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::prompt::{Tip, Tips};
    use crate::test_support::{empty_env, fixed_host, map_env, sample_tips};
    use clap::Parser;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    fn run(builder: &PromptBuilder<HashMap<String, String>>, args: &[&str], stdin: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("aiprompt").chain(args.iter().copied()))
            .unwrap();
        execute(builder, cli.command, cli.compact, stdin.as_bytes())
    }

    fn builder() -> PromptBuilder<HashMap<String, String>> {
        PromptBuilder::new(sample_tips(), fixed_host(), map_env([("TERM", "xterm")]))
            .with_api_info("API TEXT")
    }

    #[test]
    fn system_prints_text() {
        let out = run(&builder(), &["system"], "").unwrap();
        assert!(out.starts_with("\nYou are an expert Python programmer.\n"));
        assert!(out.contains("<tips>"));
        assert!(out.contains("API TEXT"));
    }

    #[test]
    fn system_user_prompt_flag_overrides_config() {
        let b = builder().with_user_prompt("From config.");
        let out = run(&b, &["system"], "").unwrap();
        assert!(out.starts_with("\nFrom config.\n"));

        let out = run(&b, &["system", "--user-prompt", "From flag."], "").unwrap();
        assert!(out.starts_with("\nFrom flag.\n"));
        assert!(!out.contains("<tips>"));
    }

    #[test]
    fn system_without_role_is_prompt_error() {
        let b = PromptBuilder::new(Tips::default(), fixed_host(), empty_env());
        let err = run(&b, &["system"], "").unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
    }

    #[test]
    fn system_with_role_only() {
        let b = PromptBuilder::new(Tips::new(Tip::new("r", "Role.")), fixed_host(), empty_env());
        let out = run(&b, &["system"], "").unwrap();
        assert!(out.starts_with("\nRole.\n"));
        assert!(!out.contains("<tips>"));
    }

    #[test]
    fn task_prints_ordered_json() {
        let out = run(&builder(), &["task", "Plot a sine wave", "--compact"], "").unwrap();
        assert!(out.starts_with(r#"{"task":"Plot a sine wave","source":"User","context":{"#));
        assert!(out.contains(r#""TERM":"xterm","LC_TERMINAL":"unknown""#));
    }

    #[test]
    fn task_gui_from_flag_or_config() {
        let out = run(&builder(), &["task", "x", "--gui"], "").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert!(value["constraints"].get("matplotlib").is_some());
        assert!(value["context"].get("TERM").is_none());

        let out = run(&builder().with_gui(true), &["task", "x"], "").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert!(value["constraints"].get("matplotlib").is_some());
    }

    #[test]
    fn results_reads_array_from_stdin() {
        let out = run(
            &builder(),
            &["results"],
            r#"[{"block_name": "b", "stdout": "1"}, {"block_name": "c"}]"#,
        )
        .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "Runtime Environment");
        assert_eq!(
            value["results"],
            json!([{"block_name": "b", "stdout": "1"}, {"block_name": "c"}])
        );
    }

    #[test]
    fn results_rejects_non_array() {
        let err = run(&builder(), &["results"], r#"{"stdout": "x"}"#).unwrap_err();
        assert!(matches!(err, AppError::InputError(_)));
    }

    #[test]
    fn chat_prints_prompt() {
        let out = run(&builder(), &["chat", "add a legend", "--task", "Plot"], "").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["message"], "add a legend");
        assert_eq!(value["context"]["initial_task"], "Plot");
    }

    #[test]
    fn mcp_result_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tool.json");
        std::fs::write(&path, r#"{"content": "42", "z": 1, "a": 2}"#).unwrap();

        let out = run(
            &builder(),
            &["mcp-result", "--input", path.to_str().unwrap(), "--compact"],
            "",
        )
        .unwrap();
        assert_eq!(
            out,
            r#"{"message":"The following is the result of the MCP tool call","source":"MCP Tool","result":{"content":"42","z":1,"a":2}}"#
        );
    }

    #[test]
    fn pretty_output_is_default() {
        let out = run(&builder(), &["chat", "m", "-t", "t"], "").unwrap();
        assert!(out.contains("\n  \"message\": \"m\""));
    }
}

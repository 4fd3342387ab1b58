//! Prompts that feed execution and tool results back to the model.
//!
//! The payloads are opaque here: anything `Serialize` is passed through
//! unchanged, in the order given.

use serde::Serialize;

pub const RESULTS_MESSAGE: &str = "These are the execution results of the code block/s automatically returned in the order of execution by the runtime environment.";
pub const SOURCE_RUNTIME: &str = "Runtime Environment";

pub const MCP_RESULT_MESSAGE: &str = "The following is the result of the MCP tool call";
pub const SOURCE_MCP_TOOL: &str = "MCP Tool";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsPrompt<R> {
    pub message: &'static str,
    pub source: &'static str,
    pub results: Vec<R>,
}

/// Wrap code block execution results, in execution order.
pub fn build_results_prompt<R: Serialize>(results: Vec<R>) -> ResultsPrompt<R> {
    ResultsPrompt {
        message: RESULTS_MESSAGE,
        source: SOURCE_RUNTIME,
        results,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McpResultPrompt<R> {
    pub message: &'static str,
    pub source: &'static str,
    pub result: R,
}

/// Wrap the result of an MCP tool call.
pub fn build_mcp_result_prompt<R: Serialize>(result: R) -> McpResultPrompt<R> {
    McpResultPrompt {
        message: MCP_RESULT_MESSAGE,
        source: SOURCE_MCP_TOOL,
        result,
    }
}

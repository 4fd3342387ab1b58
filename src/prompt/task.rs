//! Task and chat prompts: the user's turn, with context and constraints.

use super::env::{Environment, HostInfo};
use super::SOURCE_USER;
use serde::Serialize;

pub const TASK_REPLY_LANGUAGE: &str =
    "Now, use the exact language of the `task` field for subsequent responses";
pub const CHAT_REPLY_LANGUAGE: &str =
    "Now, use the exact language of the `message` field for subsequent responses";
pub const FILE_CREATION_PATH: &str = "current_directory";
pub const MATPLOTLIB_GUI_CONSTRAINT: &str = "DO NOT use plt.show to display picture because I'm using the Agg backend. Save pictures with plt.savefig() and display them with runtime.display().";

/// A new task from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPrompt {
    pub task: String,
    pub source: &'static str,
    pub context: TaskContext,
    pub constraints: TaskConstraints,
}

/// Where the code will run. Serialized in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskContext {
    pub os_type: String,
    pub os_locale: String,
    pub os_platform: String,
    pub python_version: String,
    /// ISO-8601 date.
    pub today: String,
    /// Terminal only; absent in GUI mode.
    #[serde(rename = "TERM", skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(rename = "LC_TERMINAL", skip_serializing_if = "Option::is_none")]
    pub lc_terminal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskConstraints {
    pub reply_language: &'static str,
    pub file_creation_path: &'static str,
    /// GUI only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matplotlib: Option<&'static str>,
}

/// Build the prompt for a new task.
///
/// In terminal mode (`gui == false`) the context also carries `TERM` and
/// `LC_TERMINAL` from `env`, each `"unknown"` when unset. In GUI mode those
/// are left out and a `matplotlib` constraint is added instead.
pub fn build_task_prompt(
    instruction: &str,
    gui: bool,
    host: &HostInfo,
    env: &impl Environment,
) -> TaskPrompt {
    let (term, lc_terminal) = if gui {
        (None, None)
    } else {
        (
            Some(env.var_or_unknown("TERM")),
            Some(env.var_or_unknown("LC_TERMINAL")),
        )
    };

    TaskPrompt {
        task: instruction.to_string(),
        source: SOURCE_USER,
        context: TaskContext {
            os_type: host.os_type.clone(),
            os_locale: host.os_locale.clone(),
            os_platform: host.os_platform.clone(),
            python_version: host.python_version.clone(),
            today: host.today.format("%Y-%m-%d").to_string(),
            term,
            lc_terminal,
        },
        constraints: TaskConstraints {
            reply_language: TASK_REPLY_LANGUAGE,
            file_creation_path: FILE_CREATION_PATH,
            matplotlib: gui.then_some(MATPLOTLIB_GUI_CONSTRAINT),
        },
    }
}

/// A follow-up message within an ongoing task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPrompt {
    pub message: String,
    pub source: &'static str,
    pub context: ChatContext,
    pub constraints: ChatConstraints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatContext {
    pub initial_task: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatConstraints {
    pub reply_language: &'static str,
}

/// Build the prompt for a follow-up message, keeping the original task as context.
pub fn build_chat_prompt(message: &str, initial_task: &str) -> ChatPrompt {
    ChatPrompt {
        message: message.to_string(),
        source: SOURCE_USER,
        context: ChatContext {
            initial_task: initial_task.to_string(),
        },
        constraints: ChatConstraints {
            reply_language: CHAT_REPLY_LANGUAGE,
        },
    }
}

//! One object holding everything the five builders need for a session.

use super::env::{Environment, HostInfo, ProcessEnv};
use super::feedback::{McpResultPrompt, ResultsPrompt, build_mcp_result_prompt, build_results_prompt};
use super::system::build_system_prompt;
use super::task::{ChatPrompt, TaskPrompt, build_chat_prompt, build_task_prompt};
use super::tips::Tips;
use super::PromptError;
use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use tracing::info;

/// Session-wide prompt inputs.
///
/// Tips, API info and the host snapshot are fixed for the session; each
/// prompt call only passes what changes per turn.
#[derive(Debug, Clone)]
pub struct PromptBuilder<E = ProcessEnv> {
    pub tips: Tips,
    pub api_info: String,
    pub user_prompt: Option<String>,
    pub host: HostInfo,
    pub gui: bool,
    env: E,
}

impl<E: Environment> PromptBuilder<E> {
    pub fn new(tips: Tips, host: HostInfo, env: E) -> Self {
        Self {
            tips,
            api_info: String::new(),
            user_prompt: None,
            host,
            gui: false,
            env,
        }
    }

    /// Build from a loaded config, detecting the host through `env`.
    ///
    /// Reads the tips file named by the config, if any.
    pub fn from_config(config: &Config, env: E) -> Result<Self> {
        let tips = config.load_tips()?;

        let mut host = HostInfo::detect(&env, config.python_version.as_deref());
        if let Some(locale) = &config.locale {
            host = host.with_locale(locale.clone());
        }

        info!(
            tips = tips.len(),
            apis = config.apis.len(),
            gui = config.gui,
            "prompt builder configured"
        );

        Ok(Self {
            tips,
            api_info: config.api_info(),
            user_prompt: config.user_prompt.clone(),
            host,
            gui: config.gui,
            env,
        })
    }

    pub fn with_api_info(mut self, api_info: impl Into<String>) -> Self {
        self.api_info = api_info.into();
        self
    }

    pub fn with_user_prompt(mut self, user_prompt: impl Into<String>) -> Self {
        self.user_prompt = Some(user_prompt.into());
        self
    }

    pub fn with_gui(mut self, gui: bool) -> Self {
        self.gui = gui;
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// System prompt using the session's user prompt, if any.
    pub fn system_prompt(&self) -> std::result::Result<String, PromptError> {
        build_system_prompt(&self.tips, &self.api_info, self.user_prompt.as_deref())
    }

    pub fn task_prompt(&self, instruction: &str) -> TaskPrompt {
        build_task_prompt(instruction, self.gui, &self.host, &self.env)
    }

    pub fn results_prompt<R: Serialize>(&self, results: Vec<R>) -> ResultsPrompt<R> {
        build_results_prompt(results)
    }

    pub fn chat_prompt(&self, message: &str, initial_task: &str) -> ChatPrompt {
        build_chat_prompt(message, initial_task)
    }

    pub fn mcp_result_prompt<R: Serialize>(&self, result: R) -> McpResultPrompt<R> {
        build_mcp_result_prompt(result)
    }
}

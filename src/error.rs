//! Error types for aiprompt.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::prompt::PromptError;
use thiserror::Error;

/// Main error type for configuration loading and the CLI.
#[derive(Error, Debug)]
pub enum AppError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config or tips file could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Result payload (file or stdin) could not be read or is not valid JSON.
    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("Prompt assembly failed: {0}")]
    Prompt(#[from] PromptError),

    #[error("Failed to serialize prompt: {0}")]
    Serialize(String),
}

impl AppError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UserError(_) => exit_codes::USER_ERROR,
            AppError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            AppError::InputError(_) => exit_codes::INPUT_ERROR,
            AppError::Prompt(_) => exit_codes::USER_ERROR,
            AppError::Serialize(_) => exit_codes::INPUT_ERROR,
        }
    }
}

/// Result type alias for aiprompt operations.
pub type Result<T> = std::result::Result<T, AppError>;

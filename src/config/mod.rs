//! Configuration model for aiprompt.
//!
//! This module defines the Config struct that represents `aiprompt.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{Config, DEFAULT_CONFIG_FILE};

//! Line processor configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// How each processed line is written to the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of `{"%k": tag, "%v": value}` objects
    #[default]
    Tagged,
    /// Literal syntax; lists and tuples of scalars read back to the same values
    Literal,
    /// Rust debug representation
    Debug,
}

/// Settings for [`crate::repl::Repl`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Prompt written before each line is read; none when piping
    pub prompt: Option<String>,
    /// Output rendering
    pub format: OutputFormat,
    /// Print the token stream instead of the parsed values
    pub show_tokens: bool,
}

impl ReplConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

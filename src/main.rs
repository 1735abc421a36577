//! Command-line front end: reads literal data lines from stdin and prints
//! the parsed values, one output line per input line.
//!
//! Usage:
//!   exdata [--format tagged|literal|debug] [--prompt <text>] [--tokens] [--config <file>]

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use exdata::{OutputFormat, Repl, ReplConfig};

#[derive(Debug, Parser)]
#[command(name = "exdata", version = exdata::VERSION, about = "Parse Elixir-style literal data, one line at a time")]
struct Cli {
    /// Output format (default: tagged)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Prompt shown before each line is read
    #[arg(short, long)]
    prompt: Option<String>,

    /// Print the token stream instead of the parsed values
    #[arg(short, long)]
    tokens: bool,

    /// JSON configuration file; command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<ReplConfig> {
        let mut config = match &self.config {
            Some(path) => ReplConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => ReplConfig::default(),
        };

        if let Some(format) = self.format {
            config.format = format;
        }
        if self.prompt.is_some() {
            config.prompt = self.prompt;
        }
        config.show_tokens |= self.tokens;

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;
    let repl = Repl::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match repl.run(stdin.lock(), stdout.lock()) {
        Ok(_) => Ok(()),
        Err(e) if e.is_broken_pipe() => Ok(()),
        Err(e) => Err(e).context("processing input"),
    }
}

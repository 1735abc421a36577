//! Read-parse-print loop over any line source
//!
//! Each line is tokenized and parsed independently; nothing carries over
//! from one line to the next.

use std::io::{BufRead, Write};

use crate::config::{OutputFormat, ReplConfig};
use crate::error::Result;
use crate::lexer::{tokenize, Token};
use crate::parser::{parse, Node};

/// Line processor
pub struct Repl {
    config: ReplConfig,
}

impl Repl {
    /// Creates a line processor with the given settings
    pub fn new(config: ReplConfig) -> Self {
        Repl { config }
    }

    /// Processes lines until the source is exhausted, returning how many were read
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<usize> {
        let mut lines = input.lines();
        let mut count = 0;

        loop {
            if let Some(prompt) = &self.config.prompt {
                write!(output, "{}", prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let rendered = self.process_line(&line?)?;
            writeln!(output, "{}", rendered)?;
            count += 1;
        }

        tracing::debug!(lines = count, "input exhausted");
        Ok(count)
    }

    /// Tokenizes, parses and renders one line
    pub fn process_line(&self, line: &str) -> Result<String> {
        let tokens = tokenize(line.trim_end());

        if self.config.show_tokens {
            return self.render_tokens(&tokens);
        }

        let nodes = parse(&tokens);
        self.render_nodes(&nodes)
    }

    fn render_nodes(&self, nodes: &[Node]) -> Result<String> {
        let rendered = match self.config.format {
            OutputFormat::Tagged => serde_json::to_string(nodes)?,
            OutputFormat::Literal => nodes
                .iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            OutputFormat::Debug => format!("{:?}", nodes),
        };
        Ok(rendered)
    }

    fn render_tokens(&self, tokens: &[Token]) -> Result<String> {
        let rendered = match self.config.format {
            OutputFormat::Tagged => serde_json::to_string(tokens)?,
            OutputFormat::Literal => tokens
                .iter()
                .map(|token| format!("{}({})", token.kind, token.lexeme))
                .collect::<Vec<_>>()
                .join(" "),
            OutputFormat::Debug => format!("{:?}", tokens),
        };
        Ok(rendered)
    }
}

impl Default for Repl {
    fn default() -> Self {
        Repl::new(ReplConfig::default())
    }
}

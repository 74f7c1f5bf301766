//! Concrete [`Voice`] implementations.
//!
//! * [`StdoutVoice`] writes each line to standard output.
//! * [`Transcript`] keeps the lines in memory, in the order they were said.

use std::io::{self, Write};

use kennel_common::Result;
use kennel_common::voice::Voice;

/// Writes every line to standard output, newline terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutVoice;

impl Voice for StdoutVoice {
    fn say(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Voice for Transcript {
    fn say(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

//! Line-based input sources for the round controller
//!
//! The controller only ever asks for the next line. Where that line
//! comes from (a terminal, a test script, a random responder) is up to
//! the provider.

use std::collections::VecDeque;
use std::io::BufRead;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::Result;
use crate::incident::random_incident;

/// Source of input lines. `Ok(None)` means the stream has ended.
pub trait InputProvider {
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Reads lines from any buffered reader (stdin in the game binary)
pub struct LineReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for LineReader<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Replays a fixed list of lines, then reports end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Answers every round with a random menu incident
///
/// Each round consumes three lines: incident type, location, and the
/// acknowledgment. Never produces a blank type line, so the sequence
/// stays aligned with the controller's prompts.
pub struct AutoResponder {
    rng: ChaCha8Rng,
    pending: VecDeque<String>,
}

impl AutoResponder {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            pending: VecDeque::new(),
        }
    }
}

impl InputProvider for AutoResponder {
    fn read_line(&mut self) -> Result<Option<String>> {
        if self.pending.is_empty() {
            let incident = random_incident(&mut self.rng);
            self.pending.push_back(incident.kind);
            self.pending.push_back(incident.location);
            self.pending.push_back(String::new());
        }
        Ok(self.pending.pop_front())
    }
}

//! Line-accumulating parse session
//!
//! The interactive read-loop feeds input one line at a time. A [`Session`]
//! owns the growing raw buffer, re-runs the whole-model parser after every
//! line, and stashes entities once the top-level parse finally matches.
//! The parser core stays stateless; all accumulation lives here.

use crate::entity::Entity;
use crate::grammar::parse_model;
use crate::log_debug;

/// Accumulated input and parse results for one round of the read-loop.
#[derive(Debug, Default)]
pub struct Session {
    buffer: String,
    parsed: Vec<Entity>,
    rest_from: usize,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw line (a newline is added) and re-parse the whole
    /// buffer. Returns true once parsed entities are available.
    pub fn push_line(&mut self, line: &str) -> bool {
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self.reparse()
    }

    /// Replace the buffer wholesale (used by the `example` command) and
    /// re-parse it. Entities from earlier rounds are discarded along with
    /// the buffer; the session starts over on the new text.
    pub fn load(&mut self, text: &str) -> bool {
        self.reset();
        self.buffer.push_str(text);
        self.reparse()
    }

    /// Discard the buffer and any parsed entities.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.parsed.clear();
        self.rest_from = 0;
    }

    /// The raw accumulated buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The unconsumed suffix of the buffer after the most recent parse
    /// attempt. Equals the whole buffer while parsing has not yet matched.
    pub fn rest(&self) -> &str {
        &self.buffer[self.rest_from..]
    }

    /// Entities accumulated by matching parse rounds, in source order.
    pub fn results(&self) -> &[Entity] {
        &self.parsed
    }

    /// Hand over the parsed entities and clear the buffer for the next
    /// round.
    pub fn take_results(&mut self) -> Vec<Entity> {
        self.buffer.clear();
        self.rest_from = 0;
        std::mem::take(&mut self.parsed)
    }

    fn reparse(&mut self) -> bool {
        let outcome = parse_model(&self.buffer);
        self.rest_from = self.buffer.len() - outcome.rest.len();
        if let Some(entities) = outcome.entities {
            log_debug!("session: round matched {} entities", entities.len());
            self.parsed.extend(entities);
        }
        !self.parsed.is_empty()
    }
}

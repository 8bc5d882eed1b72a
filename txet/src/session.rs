//! Interactive session - turns typed lines into engine turns.
//!
//! Narrative lines pile up until an empty line hands the whole passage to the
//! engine. A line beginning with "The End." closes the session.

use salience_core::{Command, Engine, EngineError, Randomness, SeededRandomness};
use tracing::{debug, info};

/// Lower-cased prefix that closes the session.
pub const END_MARKER: &str = "the end.";

pub const INTRO: &str = "\
Txet: a reverse text adventure.

For help, type 'help'.

Leave a blank line to let the player act.
Start a line with 'The End.' to finish.";

pub const HELP: &str = "\
Txet turns the text adventure around: you tell the story, and the computer
plays it, mostly at random.

Try something like:
  You wake in a small room. There is a key on a table, and a door to the north.

Write as many lines as you like. A blank line lets the player respond.

Finish the adventure with 'The End.' at the start of a line. Anything after
it on the same line is ignored.";

/// What the caller should do after a line is fed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The line joined the current passage.
    Listening,
    /// The player acted on the passage.
    Command(Command),
    /// Show the help text.
    Help,
    /// The story is over.
    End,
}

/// Line accumulator in front of an [`Engine`].
pub struct Session<R: Randomness = SeededRandomness> {
    engine: Engine<R>,
    passage: Vec<String>,
}

impl<R: Randomness> Session<R> {
    pub fn new(engine: Engine<R>) -> Self {
        Self {
            engine,
            passage: Vec::new(),
        }
    }

    /// Feed one input line.
    pub fn feed(&mut self, line: &str) -> Result<Reply, EngineError> {
        let line = line.trim();

        if line.is_empty() {
            let text = self.passage.join(" ");
            self.passage.clear();
            return Ok(Reply::Command(self.engine.respond(&text)?));
        }

        if line.to_lowercase().starts_with(END_MARKER) {
            info!(turns = self.engine.turns(), "story ended");
            return Ok(Reply::End);
        }

        if line == "?" || line.eq_ignore_ascii_case("help") {
            return Ok(Reply::Help);
        }

        debug!(pending = self.passage.len() + 1, "narrative line");
        self.passage.push(line.to_string());
        Ok(Reply::Listening)
    }

    /// Lines waiting for the next blank line.
    #[cfg(test)]
    pub fn passage(&self) -> &[String] {
        &self.passage
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }
}

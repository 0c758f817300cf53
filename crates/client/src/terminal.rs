//! Terminal adapters for the core's input and output collaborators.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use game_core::{ChoiceProvider, OutputSink};

/// Reads menu selections from a line-based reader, re-prompting until the
/// answer is valid.
///
/// When the reader is exhausted the provider stops prompting and answers
/// with the most conservative choice: `q` when quitting is offered,
/// otherwise the first option, and the lowest number for integer prompts.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
    closed: bool,
}

impl TerminalInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            tracing::warn!("failed to write prompt: {}", e);
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        let written = write!(self.writer, "{prompt}: ").and_then(|()| self.writer.flush());
        if let Err(e) = written {
            tracing::warn!("failed to write prompt: {}", e);
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                tracing::warn!("input closed; using default answers");
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!("failed to read input: {}", e);
                self.closed = true;
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> ChoiceProvider for TerminalInput<R, W> {
    fn choose_int(&mut self, prompt: &str, min: u32, max: u32) -> u32 {
        loop {
            let Some(answer) = self.read_answer(prompt) else {
                return min;
            };
            match answer.parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return value,
                _ => self.say(&format!("Please enter a number between {min} and {max}.")),
            }
        }
    }

    fn choose_option(&mut self, prompt: &str, valid: &[&str]) -> String {
        loop {
            let Some(answer) = self.read_answer(prompt) else {
                let fallback = valid
                    .iter()
                    .find(|token| token.eq_ignore_ascii_case("q"))
                    .or_else(|| valid.first())
                    .copied()
                    .unwrap_or_default();
                return fallback.to_ascii_lowercase();
            };
            if let Some(token) = valid.iter().find(|token| token.eq_ignore_ascii_case(&answer)) {
                return token.to_ascii_lowercase();
            }
            self.say(&format!("Invalid input. Options: {}", valid.join(", ")));
        }
    }
}

/// Prints the event log, one line per event.
pub struct ConsoleSink<W> {
    writer: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            tracing::warn!("failed to write event: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reprompts_until_in_range() {
        let mut input = TerminalInput::new(Cursor::new("abc\n9\n2\n"), Vec::new());
        assert_eq!(input.choose_int("Choose", 1, 3), 2);

        let transcript = String::from_utf8(input.writer).unwrap();
        assert_eq!(transcript.matches("Please enter a number between 1 and 3.").count(), 2);
    }

    #[test]
    fn options_are_case_insensitive() {
        let mut input = TerminalInput::new(Cursor::new("x\nW\n"), Vec::new());
        assert_eq!(input.choose_option("Action", &["w", "a", "q"]), "w");
    }

    #[test]
    fn closed_input_answers_conservatively() {
        let mut input = TerminalInput::new(Cursor::new(""), Vec::new());
        assert_eq!(input.choose_option("Action", &["w", "q"]), "q");
        assert_eq!(input.choose_option("Action", &["y", "n"]), "y");
        assert_eq!(input.choose_int("Choose", 0, 4), 0);
    }

    #[test]
    fn console_sink_writes_lines() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit("Battle Started!");
        sink.emit("Victory!");
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "Battle Started!\nVictory!\n"
        );
    }
}

//! Input and output collaborators.
//!
//! The core asks for menu selections through [`ChoiceProvider`] and reports
//! what happened through [`OutputSink`]. Terminal adapters live outside the
//! core; the scripted implementations here drive tests and replays.

use std::collections::VecDeque;

/// Source of validated menu selections.
///
/// Implementations block until a valid answer is available; returned values
/// are always inside the requested bounds.
pub trait ChoiceProvider {
    /// Returns an integer in `min..=max`.
    fn choose_int(&mut self, prompt: &str, min: u32, max: u32) -> u32;

    /// Returns one of `valid` (compared case-insensitively, returned lowercase).
    fn choose_option(&mut self, prompt: &str, valid: &[&str]) -> String;
}

/// Append-only textual event log.
pub trait OutputSink {
    fn emit(&mut self, line: &str);
}

impl<P: ChoiceProvider + ?Sized> ChoiceProvider for &mut P {
    fn choose_int(&mut self, prompt: &str, min: u32, max: u32) -> u32 {
        (**self).choose_int(prompt, min, max)
    }

    fn choose_option(&mut self, prompt: &str, valid: &[&str]) -> String {
        (**self).choose_option(prompt, valid)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// A single scripted answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Int(u32),
    Option(String),
}

impl From<u32> for Choice {
    fn from(value: u32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::Option(value.to_ascii_lowercase())
    }
}

/// Replays a queue of answers in order.
///
/// Out-of-range integers are clamped into the requested bounds and unknown
/// tokens fall back to the first valid token, mirroring the guarantee that
/// a real provider only ever returns valid selections. Once the script is
/// exhausted, the lowest integer / first token is returned.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    answers: VecDeque<Choice>,
    prompts: Vec<String>,
}

impl ScriptedChoices {
    pub fn new<I, C>(answers: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts that were asked, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers that have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose_int(&mut self, prompt: &str, min: u32, max: u32) -> u32 {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Choice::Int(value)) => value.clamp(min, max),
            Some(Choice::Option(token)) => token.parse::<u32>().map_or(min, |v| v.clamp(min, max)),
            None => min,
        }
    }

    fn choose_option(&mut self, prompt: &str, valid: &[&str]) -> String {
        self.prompts.push(prompt.to_string());
        let fallback = valid.first().map(|token| token.to_ascii_lowercase()).unwrap_or_default();
        match self.answers.pop_front() {
            Some(Choice::Option(token)) if valid.iter().any(|v| v.eq_ignore_ascii_case(&token)) => {
                token
            }
            _ => fallback,
        }
    }
}

/// Collects emitted lines in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

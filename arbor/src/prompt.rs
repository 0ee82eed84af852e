//! Blocking user prompts supplied by the host.

use std::collections::VecDeque;

/// Modal prompt capability of the host UI.
pub trait Prompt {
    /// Ask for text, pre-filled with `default`. `None` means the user
    /// cancelled, which callers treat exactly like an empty answer.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

/// A [`Prompt`] that replays queued answers.
///
/// When a queue runs dry, text prompts are cancelled and confirmations
/// are declined. Every message asked is recorded in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    confirms: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer.
    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(Some(text.into()));
        self
    }

    /// Queue a cancelled text prompt.
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Queue a confirmation answer.
    pub fn confirm_with(mut self, yes: bool) -> Self {
        self.confirms.push_back(yes);
        self
    }

    /// Messages asked so far, prompts and confirmations interleaved.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt(&mut self, message: &str, _default: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirms.pop_front().unwrap_or(false)
    }
}

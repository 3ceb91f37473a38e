//! Scripted [`Prompt`] implementation for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ClientError, Result};
use crate::prompt::Prompt;

/// One queued answer for a [`ScriptedPrompt`].
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Secret(String),
    Yes,
    No,
    Choice(usize),
}

/// A [`Prompt`] that replays a fixed queue of answers.
///
/// Each interactive step pops the next answer; a mismatch between the step
/// kind and the queued answer, or an exhausted queue, fails the test with a
/// descriptive [`ClientError::Prompt`]. This keeps flow tests honest about
/// exactly how many prompts each path performs.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<Answer>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }

    /// Whether every queued answer has been consumed.
    pub fn exhausted(&self) -> bool {
        self.answers
            .lock()
            .map(|queue| queue.is_empty())
            .unwrap_or(true)
    }

    fn next(&self, step: &str, message: &str) -> Result<Answer> {
        let mut queue = self
            .answers
            .lock()
            .map_err(|_| ClientError::Prompt("scripted prompt poisoned".to_string()))?;
        queue.pop_front().ok_or_else(|| {
            ClientError::Prompt(format!("no scripted answer left for {step}: {message:?}"))
        })
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&self, message: &str) -> Result<String> {
        match self.next("input", message)? {
            Answer::Text(text) => Ok(text),
            other => Err(ClientError::Prompt(format!(
                "expected Text for input {message:?}, got {other:?}"
            ))),
        }
    }

    fn password(&self, message: &str) -> Result<String> {
        match self.next("password", message)? {
            Answer::Secret(secret) => Ok(secret),
            other => Err(ClientError::Prompt(format!(
                "expected Secret for password {message:?}, got {other:?}"
            ))),
        }
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        match self.next("confirm", message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => Err(ClientError::Prompt(format!(
                "expected Yes/No for confirm {message:?}, got {other:?}"
            ))),
        }
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        match self.next("select", message)? {
            Answer::Choice(index) if index < items.len() => Ok(index),
            Answer::Choice(index) => Err(ClientError::Prompt(format!(
                "scripted choice {index} out of range for select {message:?} ({} items)",
                items.len()
            ))),
            other => Err(ClientError::Prompt(format!(
                "expected Choice for select {message:?}, got {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_answers_in_order() {
        let prompt = ScriptedPrompt::new([
            Answer::Text("https://acme.plextrac.com".to_string()),
            Answer::Yes,
            Answer::Choice(1),
        ]);

        assert_eq!(prompt.input("url").unwrap(), "https://acme.plextrac.com");
        assert!(prompt.confirm("continue?").unwrap());
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(prompt.select("pick", &items).unwrap(), 1);
        assert!(prompt.exhausted());
    }

    #[test]
    fn exhausted_queue_is_an_error() {
        let prompt = ScriptedPrompt::new([]);
        assert!(prompt.input("anything").is_err());
    }

    #[test]
    fn kind_mismatch_is_an_error() {
        let prompt = ScriptedPrompt::new([Answer::Yes]);
        assert!(prompt.password("pw").is_err());
    }

    #[test]
    fn out_of_range_choice_is_an_error() {
        let prompt = ScriptedPrompt::new([Answer::Choice(5)]);
        let items = vec!["only".to_string()];
        assert!(prompt.select("pick", &items).is_err());
    }
}

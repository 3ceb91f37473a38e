//! Interactive prompt seam.
//!
//! The session manager's validation and authentication flows need user input
//! (URL corrections, credentials, MFA codes, retry decisions). Those steps go
//! through this trait so the flows stay testable: the CLI provides a
//! dialoguer-backed implementation, tests provide a scripted one.

use crate::error::Result;

/// User interaction required by the session flows and the workflow.
pub trait Prompt {
    /// Ask for a free-form line of input.
    fn input(&self, message: &str) -> Result<String>;

    /// Ask for a secret; input must not be echoed to the terminal.
    fn password(&self, message: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Ask the user to pick one of `items`, returning its index.
    fn select(&self, message: &str, items: &[String]) -> Result<usize>;

    /// Shared retry prompt shape. Answering no is a global abort, not a
    /// local skip; callers translate `false` into an abort error.
    fn retry(&self, message: &str) -> Result<bool> {
        self.confirm(&format!("{message} Try Again?"))
    }
}

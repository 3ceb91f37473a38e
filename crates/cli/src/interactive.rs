//! Terminal-backed [`Prompt`] implementation.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use plextrac_client::error::{ClientError, Result};
use plextrac_client::Prompt;

/// Prompts rendered with dialoguer on the controlling terminal.
#[derive(Default)]
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

fn map_err(e: dialoguer::Error) -> ClientError {
    ClientError::Prompt(e.to_string())
}

impl Prompt for DialoguerPrompt {
    fn input(&self, message: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .interact_text()
            .map_err(map_err)
    }

    fn password(&self, message: &str) -> Result<String> {
        Password::with_theme(&self.theme)
            .with_prompt(message)
            .interact()
            .map_err(map_err)
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(map_err)
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .map_err(map_err)
    }
}

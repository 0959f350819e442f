use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::errors::CliError;

/// Where the shell reads user answers from. `None` means input is exhausted.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        Ok(self
            .read_line(&format!("{prompt} (yes/no)"))?
            .map(|answer| is_affirmative(&answer)))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Terminal prompts rendered with dialoguer.
pub struct PromptInput {
    theme: ColorfulTheme,
}

impl PromptInput {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for PromptInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for PromptInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        end_of_input_as_none(result)
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        let result = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact();
        end_of_input_as_none(result)
    }
}

fn end_of_input_as_none<T>(result: dialoguer::Result<T>) -> Result<Option<T>, CliError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Line-by-line answers read from any buffered reader, used in script mode.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

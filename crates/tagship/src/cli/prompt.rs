//! Interactive prompts with defaults

use dialoguer::Input;

use tagship_core::error::WorkflowError;
use tagship_core::{Result, TagshipError};
use tagship_publish::ProfilePrompt;

/// Profile prompt for the terminal; `--yes` or an unattended run always
/// takes the default
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    /// Prompt only when a user is attached and `yes` was not given
    pub fn new(yes: bool) -> Self {
        Self {
            interactive: !yes && console::user_attended(),
        }
    }

    /// Whether answers are read from the terminal
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Ask for a line of text, returning `default` when not interactive
    pub fn text(&self, prompt: &str, default: &str) -> Result<String> {
        if !self.interactive {
            return Ok(default.to_string());
        }

        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }
}

impl ProfilePrompt for TerminalPrompt {
    fn choose(&self, names: &[&str], default: &str) -> Result<String> {
        if !self.interactive {
            return Ok(String::new());
        }

        Input::<String>::new()
            .with_prompt(format!("Credential profile ({})", names.join(", ")))
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> TagshipError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            WorkflowError::Cancelled.into()
        }
        dialoguer::Error::IO(e) => TagshipError::Io(e),
    }
}

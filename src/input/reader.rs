use std::path::PathBuf;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::ShellHelper;
use crate::config::ShellConfig;
use crate::error::ShellError;

/// Source of prompted input lines for the shell loop.
pub trait LineReader {
    /// Returns the next line, or `None` once input has ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;

    fn add_history(&mut self, line: &str);

    /// Called once when the loop terminates normally.
    fn finish(&mut self) {}
}

pub struct RustylineReader {
    editor: Editor<ShellHelper, FileHistory>,
    history_file: Option<PathBuf>,
}

impl RustylineReader {
    pub fn new(config: &ShellConfig) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;
        editor.set_helper(Some(ShellHelper::new()));
        editor.set_auto_add_history(false);
        editor.set_max_history_size(config.max_history)?;

        if let Some(path) = &config.history_file {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    log::warn!("couldn't load history from {}: {}", path.display(), e);
                }
            }
        }

        Ok(RustylineReader {
            editor,
            history_file: config.history_file.clone(),
        })
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C at the prompt abandons the line.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            log::warn!("couldn't add to history: {}", e);
        }
    }

    fn finish(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                log::warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
    }
}

use std::path::PathBuf;

use crate::flags::Flags;

pub const PROMPT: &str = "~ ";
pub const MAX_HISTORY: usize = 1000;
const HISTORY_FILE_NAME: &str = ".tinysh_history";

/// Startup settings, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub history_file: Option<PathBuf>,
    pub max_history: usize,
    pub quiet: bool,
    pub debug: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: PROMPT.to_string(),
            history_file: default_history_file(),
            max_history: MAX_HISTORY,
            quiet: false,
            debug: false,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Self {
        let history_file = if flags.is_set("no-history") {
            None
        } else if let Some(path) = flags.get_value("history-file") {
            Some(PathBuf::from(path))
        } else {
            default_history_file()
        };

        ShellConfig {
            history_file,
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
            ..Self::default()
        }
    }

    /// Filter used by the logger when `TINYSH_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

fn default_history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME))
}

use std::io::{self, IsTerminal};

use inksac::prelude::*;

use crate::core::commands::Builtin;
use crate::core::tokenizer::is_delim;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Colours diagnostics only when stderr is a terminal; inksac alone
    /// looks at the environment and would colour a pipe.
    pub fn for_stderr() -> Self {
        Self::for_stream(io::stderr().is_terminal())
    }

    fn for_stream(is_terminal: bool) -> Self {
        if is_terminal {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word in place, leaving every delimiter as typed
    /// so the cursor position still lines up.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let start = match input.find(|c: char| !is_delim(c)) {
            Some(start) => start,
            None => return input.to_string(),
        };
        let end = input[start..]
            .find(is_delim)
            .map_or(input.len(), |len| start + len);
        let word = &input[start..end];

        let style = if Builtin::lookup(word).is_some() {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().bold().build()
        };

        format!("{}{}{}", &input[..start], word.style(style), &input[end..])
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }
}

use std::borrow::Cow;

use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::Completer,
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Helper,
};

#[derive(Clone, Default)]
pub struct ShellHelper {
    highlighter: SyntaxHighlighter,
}

impl ShellHelper {
    pub fn new() -> Self {
        ShellHelper {
            highlighter: SyntaxHighlighter::new(),
        }
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = String;
}

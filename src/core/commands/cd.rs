use super::{required_arg, Command, CommandError};
use std::env;
use std::io::Write;

#[derive(Clone, Copy, Debug, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], _out: &mut dyn Write) -> Result<(), CommandError> {
        let path = required_arg(args, 1, "cd", "path")?;

        env::set_current_dir(path).map_err(|source| CommandError::Io {
            context: format!("cd: {}", path),
            source,
        })
    }
}

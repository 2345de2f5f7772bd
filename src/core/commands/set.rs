use super::{check_var_name, required_arg, Command, CommandError};
use std::env;
use std::io::Write;

#[derive(Clone, Copy, Debug, Default)]
pub struct SetCommand;

impl Command for SetCommand {
    fn execute(&self, args: &[String], _out: &mut dyn Write) -> Result<(), CommandError> {
        let name = required_arg(args, 1, "set", "name")?;
        let value = required_arg(args, 2, "set", "value")?;

        check_var_name(name)?;
        if value.contains('\0') {
            return Err(CommandError::InvalidArgument(format!(
                "value for {} contains a NUL byte",
                name
            )));
        }

        env::set_var(name, value);
        Ok(())
    }
}

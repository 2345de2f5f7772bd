use super::{check_var_name, required_arg, Command, CommandError};
use std::env;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

#[derive(Clone, Copy, Debug, Default)]
pub struct GetCommand;

impl Command for GetCommand {
    fn execute(&self, args: &[String], out: &mut dyn Write) -> Result<(), CommandError> {
        let name = required_arg(args, 1, "get", "name")?;
        check_var_name(name)?;

        let value = env::var_os(name).ok_or_else(|| CommandError::VarNotSet(name.to_string()))?;

        let io_err = |source: std::io::Error| CommandError::Io {
            context: "get".to_string(),
            source,
        };
        out.write_all(value.as_bytes()).map_err(io_err)?;
        out.write_all(b"\n").map_err(io_err)?;
        out.flush().map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn get(words: &[&str]) -> (Result<(), CommandError>, Vec<u8>) {
        let args: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let result = GetCommand.execute(&args, &mut out);
        (result, out)
    }

    #[test]
    #[serial]
    fn test_get_prints_value_and_newline() {
        env::set_var("TINYSH_GET_TEST", "hello world");
        let (result, out) = get(&["get", "TINYSH_GET_TEST"]);
        assert!(result.is_ok());
        assert_eq!(out, b"hello world\n");
        env::remove_var("TINYSH_GET_TEST");
    }

    #[test]
    #[serial]
    fn test_get_empty_value() {
        env::set_var("TINYSH_GET_EMPTY", "");
        let (result, out) = get(&["get", "TINYSH_GET_EMPTY"]);
        assert!(result.is_ok());
        assert_eq!(out, b"\n");
        env::remove_var("TINYSH_GET_EMPTY");
    }

    #[test]
    #[serial]
    fn test_get_unset_variable() {
        env::remove_var("TINYSH_GET_MISSING");
        let (result, out) = get(&["get", "TINYSH_GET_MISSING"]);
        assert!(matches!(result, Err(CommandError::VarNotSet(name)) if name == "TINYSH_GET_MISSING"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_get_bad_name() {
        let (result, _) = get(&["get", "A=B"]);
        assert!(matches!(result, Err(CommandError::InvalidArgument(_))));
    }

    #[test]
    fn test_get_without_name() {
        let (result, _) = get(&["get"]);
        assert!(matches!(result, Err(CommandError::MissingArgument { .. })));
    }
}

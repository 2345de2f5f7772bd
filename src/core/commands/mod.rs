use std::io::Write;

mod cd;
mod get;
mod set;

pub use cd::CdCommand;
pub use get::GetCommand;
pub use set::SetCommand;

#[derive(Debug)]
pub enum CommandError {
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidArgument(String),
    VarNotSet(String),
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument { command, argument } => {
                write!(f, "{}: missing argument <{}>", command, argument)
            }
            CommandError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            CommandError::VarNotSet(name) => write!(f, "get: {}: variable not set", name),
            CommandError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A builtin handler. `args[0]` is the name the handler was invoked by;
/// each handler checks for the arguments it needs itself.
pub trait Command {
    fn execute(&self, args: &[String], out: &mut dyn Write) -> Result<(), CommandError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Get,
    Set,
}

const BUILTINS: [(&str, Builtin); 3] = [
    ("cd", Builtin::Cd),
    ("get", Builtin::Get),
    ("set", Builtin::Set),
];

impl Builtin {
    /// Exact, case-sensitive lookup of a command name.
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find(|(builtin_name, _)| *builtin_name == name)
            .map(|(_, builtin)| *builtin)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Get => "get",
            Builtin::Set => "set",
        }
    }
}

impl Command for Builtin {
    fn execute(&self, args: &[String], out: &mut dyn Write) -> Result<(), CommandError> {
        match self {
            Builtin::Cd => CdCommand.execute(args, out),
            Builtin::Get => GetCommand.execute(args, out),
            Builtin::Set => SetCommand.execute(args, out),
        }
    }
}

fn required_arg<'a>(
    args: &'a [String],
    index: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument { command, argument })
}

// The OS rejects these, and std panics on them instead of erroring.
fn check_var_name(name: &str) -> Result<(), CommandError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(CommandError::InvalidArgument(format!(
            "bad variable name: {:?}",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lookup_exact_names() {
        assert_eq!(Builtin::lookup("cd"), Some(Builtin::Cd));
        assert_eq!(Builtin::lookup("get"), Some(Builtin::Get));
        assert_eq!(Builtin::lookup("set"), Some(Builtin::Set));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Builtin::lookup("CD"), None);
        assert_eq!(Builtin::lookup("Set"), None);
        assert_eq!(Builtin::lookup("cd "), None);
        assert_eq!(Builtin::lookup(""), None);
        assert_eq!(Builtin::lookup("exit"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for builtin in [Builtin::Cd, Builtin::Get, Builtin::Set] {
            assert_eq!(Builtin::lookup(builtin.name()), Some(builtin));
        }
    }

    #[test]
    #[serial]
    fn test_set_then_get_through_table() -> Result<(), CommandError> {
        let mut out = Vec::new();
        Builtin::Set.execute(&argv(&["set", "TINYSH_TABLE_VAR", "bar"]), &mut out)?;
        Builtin::Get.execute(&argv(&["get", "TINYSH_TABLE_VAR"]), &mut out)?;
        assert_eq!(out, b"bar\n");
        env::remove_var("TINYSH_TABLE_VAR");
        Ok(())
    }

    #[test]
    fn test_missing_argument_is_reported() {
        let mut out = Vec::new();
        for (builtin, words) in [
            (Builtin::Cd, &["cd"][..]),
            (Builtin::Get, &["get"][..]),
            (Builtin::Set, &["set", "ONLY_NAME"][..]),
        ] {
            let result = builtin.execute(&argv(words), &mut out);
            assert!(matches!(result, Err(CommandError::MissingArgument { .. })));
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::MissingArgument {
                command: "cd",
                argument: "path",
            },
            CommandError::InvalidArgument("bad".to_string()),
            CommandError::VarNotSet("FOO".to_string()),
            CommandError::Io {
                context: "cd: /nope".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "io error"),
            },
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_check_var_name() {
        assert!(check_var_name("PATH").is_ok());
        assert!(check_var_name("").is_err());
        assert!(check_var_name("A=B").is_err());
        assert!(check_var_name("A\0B").is_err());
    }
}

use crate::error::ShellError;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub name: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    const fn new(
        name: &'static str,
        short: &'static str,
        long: &'static str,
        description: &'static str,
        takes_value: bool,
    ) -> Self {
        Flag {
            name,
            short,
            long,
            description,
            takes_value,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = vec![
            Flag::new("help", "-h", "--help", "Print this help message", false),
            Flag::new("version", "-v", "--version", "Show version information", false),
            Flag::new("quiet", "-q", "--quiet", "Suppress the banner and diagnostics", false),
            Flag::new("debug", "-d", "--debug", "Log at debug level (see TINYSH_LOG)", false),
            Flag::new(
                "history-file",
                "-H",
                "--history-file",
                "Read and write history at <path>",
                true,
            ),
            Flag::new("no-history", "-n", "--no-history", "Do not load or save history", false),
        ];

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .iter_mut()
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown argument {}", arg)))?;

            flag.value = if flag.takes_value {
                let value = args.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                Some(value.clone())
            } else {
                Some("true".to_string())
            };
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .iter()
            .find(|flag| flag.name == name)
            .and_then(|flag| flag.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: tinysh [OPTIONS]");
        println!("\nOptions:");
        for flag in &self.flags {
            let long = if flag.takes_value {
                format!("{} <path>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<24} {}", flag.short, long, flag.description);
        }
    }
}

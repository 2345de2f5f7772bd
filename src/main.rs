use std::env;
use tinysh::config::ShellConfig;
use tinysh::flags::Flags;
use tinysh::shell::Shell;

fn main() -> Result<(), tinysh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("tinysh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = ShellConfig::from_flags(&flags);
    env_logger::Builder::from_env(
        env_logger::Env::new().filter_or("TINYSH_LOG", config.default_log_filter()),
    )
    .init();

    let mut shell = Shell::new(config)?;
    shell.run()
}

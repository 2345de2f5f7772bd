use std::io::{self, Write};

use crate::{
    config::ShellConfig,
    core::{
        commands::{Builtin, Command, CommandError},
        tokenizer::tokenize,
    },
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::{LineReader, RustylineReader},
    process::{signal, ChildStatus, ProcessError, ProcessExecutor},
};

/// What one input line turned into.
#[derive(Debug)]
pub enum Step {
    /// The line held no tokens.
    Skipped,
    Builtin(Builtin, Result<(), CommandError>),
    External(Result<ChildStatus, ProcessError>),
}

pub struct Shell<R: LineReader, W: Write, E: Write> {
    reader: R,
    out: W,
    err: E,
    config: ShellConfig,
    executor: ProcessExecutor,
    highlighter: SyntaxHighlighter,
}

impl Shell<RustylineReader, io::Stdout, io::Stderr> {
    /// An interactive shell on the terminal.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let reader = RustylineReader::new(&config)?;
        signal::install_interrupt_handler()?;
        let mut shell = Shell::with_reader(reader, io::stdout(), io::stderr(), config);
        shell.highlighter = SyntaxHighlighter::for_stderr();
        Ok(shell)
    }
}

impl<R: LineReader, W: Write, E: Write> Shell<R, W, E> {
    /// Builtin output goes to `out`, diagnostics to `err`, both uncoloured.
    pub fn with_reader(reader: R, out: W, err: E, config: ShellConfig) -> Self {
        Shell {
            reader,
            out,
            err,
            config,
            executor: ProcessExecutor::new(),
            highlighter: SyntaxHighlighter::plain(),
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn errors(&self) -> &E {
        &self.err
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Prompts and executes lines until the reader reports end of input.
    ///
    /// Only an allocation failure while tokenizing or a broken line reader
    /// ends the loop with an error; every command failure is reported and
    /// the prompt comes back.
    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.config.quiet {
            self.print_banner()?;
        }

        while let Some(line) = self.reader.read_line(&self.config.prompt)? {
            if line.is_empty() {
                continue;
            }

            self.reader.add_history(&line);
            let step = self.execute_line(&line)?;
            self.report(&step);
        }

        log::debug!("end of input");
        self.reader.finish();
        Ok(())
    }

    /// Tokenizes one line and routes it to a builtin or an external program.
    pub fn execute_line(&mut self, line: &str) -> Result<Step, ShellError> {
        let args = tokenize(line)?;

        let command = match args.command() {
            Some(command) => command,
            None => return Ok(Step::Skipped),
        };

        if let Some(builtin) = Builtin::lookup(command) {
            log::debug!("builtin {} with {} argument(s)", builtin.name(), args.len() - 1);
            let result = builtin.execute(args.as_slice(), &mut self.out);
            return Ok(Step::Builtin(builtin, result));
        }

        log::debug!("external command {}", command);
        Ok(Step::External(self.executor.spawn_process(&args)))
    }

    fn report(&mut self, step: &Step) {
        let message = match step {
            Step::Builtin(_, Err(e)) => e.to_string(),
            Step::External(Err(e)) => e.to_string(),
            Step::External(Ok(status)) => {
                if !status.success() {
                    log::debug!("child finished with {}", status);
                }
                return;
            }
            Step::Builtin(_, Ok(())) | Step::Skipped => return,
        };

        log::debug!("command failed: {}", message);
        if !self.config.quiet {
            let line = self
                .highlighter
                .highlight_error(&format!("tinysh: {}", message));
            if let Err(e) = writeln!(self.err, "{}", line).and_then(|()| self.err.flush()) {
                log::warn!("couldn't write diagnostic: {}", e);
            }
        }
    }

    fn print_banner(&mut self) -> Result<(), ShellError> {
        writeln!(self.out, "tinysh {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out, "Ctrl-D to exit\n")?;
        self.out.flush()?;
        Ok(())
    }
}

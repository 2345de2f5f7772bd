use std::ffi::CString;
use std::io::{self, Write};

use libc::{c_char, c_int, pid_t};

use super::{ChildStatus, ProcessError};
use crate::core::tokenizer::ArgVec;

/// Exit status of a child whose program could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit status of a child whose program was found but could not be run.
pub const EXIT_CANNOT_EXEC: i32 = 126;

#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Forks one child, replaces its image with `args[0]` looked up on
    /// `PATH`, and blocks until that child terminates.
    ///
    /// Everything the child needs is prepared before the fork, so the child
    /// side only makes async-signal-safe calls and never returns here.
    pub fn spawn_process(&self, args: &ArgVec) -> Result<ChildStatus, ProcessError> {
        let program = args
            .command()
            .ok_or_else(|| ProcessError::InvalidArgument("empty command".to_string()))?;

        let c_args = args
            .iter()
            .map(|arg| {
                CString::new(arg).map_err(|_| {
                    ProcessError::InvalidArgument(format!("{:?} contains a NUL byte", arg))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut argv: Vec<*const c_char> = c_args.iter().map(|arg| arg.as_ptr()).collect();
        argv.push(std::ptr::null());

        let prefix = format!("tinysh: {}: ", program).into_bytes();

        // Buffered prompt output must not interleave with the child's.
        let _ = io::stdout().flush();

        // SAFETY: the child branch calls only execvp, write and _exit on
        // memory allocated before the fork.
        let pid = unsafe { libc::fork() };
        match pid {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => exec_child(c_args[0].as_ptr(), &argv, &prefix),
            pid => {
                log::debug!("spawned {} as pid {}", program, pid);
                let status = wait_for(pid)?;
                log::debug!("pid {} finished: {}", pid, status);
                Ok(status)
            }
        }
    }
}

fn exec_child(program: *const c_char, argv: &[*const c_char], prefix: &[u8]) -> ! {
    // SAFETY: `program` and every non-null entry of `argv` point into live
    // CStrings owned by the caller, and `argv` is null-terminated.
    unsafe {
        libc::execvp(program, argv.as_ptr());
    }

    let (reason, code): (&[u8], i32) = match io::Error::last_os_error().raw_os_error() {
        Some(libc::ENOENT) | Some(libc::ENOTDIR) => (b"command not found\n", EXIT_NOT_FOUND),
        Some(libc::EACCES) => (b"permission denied\n", EXIT_CANNOT_EXEC),
        Some(libc::ENOEXEC) => (b"exec format error\n", EXIT_CANNOT_EXEC),
        _ => (b"execution error\n", EXIT_CANNOT_EXEC),
    };

    // SAFETY: write(2) and _exit(2) are async-signal-safe. _exit skips
    // destructors and atexit handlers that belong to the parent.
    unsafe {
        libc::write(libc::STDERR_FILENO, prefix.as_ptr().cast(), prefix.len());
        libc::write(libc::STDERR_FILENO, reason.as_ptr().cast(), reason.len());
        libc::_exit(code)
    }
}

fn wait_for(pid: pid_t) -> Result<ChildStatus, ProcessError> {
    let mut status: c_int = 0;
    loop {
        // SAFETY: `status` is a valid out-pointer for the duration of the call.
        let ret = unsafe { libc::waitpid(pid, &mut status, 0) };
        if ret == pid {
            break;
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(ProcessError::Wait(err));
        }
    }

    Ok(if libc::WIFEXITED(status) {
        ChildStatus::Exited(libc::WEXITSTATUS(status))
    } else if libc::WIFSIGNALED(status) {
        ChildStatus::Signaled(libc::WTERMSIG(status))
    } else {
        ChildStatus::Other(status)
    })
}

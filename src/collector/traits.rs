//! Abstraction over subprocess execution to enable testing and mocking.
//!
//! The `CommandRunner` trait lets the sources run the real `journalctl` and
//! `sadf` binaries, or a scripted stand-in in tests.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

/// Error raised when a tool could not be run to completion.
#[derive(Debug)]
pub enum CollectError {
    /// The program does not exist or is not on `PATH`.
    NotFound(String),
    /// Spawning or reading from the program failed.
    Io { program: String, source: io::Error },
    /// The program ran but exited unsuccessfully.
    Exit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::NotFound(program) => write!(f, "{}: command not found", program),
            CollectError::Io { program, source } => {
                write!(f, "I/O error running {}: {}", program, source)
            }
            CollectError::Exit {
                program,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "{} exited with status {}", program, code)?,
                    None => write!(f, "{} was terminated by a signal", program)?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Runs an external program to completion and returns its standard output.
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// # Returns
    /// Standard output decoded as UTF-8 (lossily), or an error when the
    /// program is missing, cannot be read from, or exits non-zero.
    fn run(&self, program: &str, args: &[String]) -> Result<String, CollectError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CollectError> {
        (**self).run(program, args)
    }
}

/// Runner that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CollectError> {
        debug!(program, ?args, "running command");

        // `output()` waits for the child and reaps it on every path.
        let output = Command::new(program)
            .args(args)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CollectError::NotFound(program.to_string()),
                _ => CollectError::Io {
                    program: program.to_string(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CollectError::Exit {
                program: program.to_string(),
                code: output.status.code(),
                stderr: stderr.lines().next().unwrap_or("").trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    /// Scripts are run through `sh` so the test never execs a file it just wrote.
    fn write_script(dir: &Path, name: &str, body: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, format!("{body}\n")).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_system_runner_captures_stdout_and_args() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "echo-args", r#"echo "$1;$2""#);
        let out = SystemRunner::new()
            .run("sh", &[script, "-0".to_string(), "x y".to_string()])
            .unwrap();
        assert_eq!(out, "-0;x y\n");
    }

    #[test]
    fn test_system_runner_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "fail", "echo 'Cannot open file' >&2\nexit 2");
        let err = SystemRunner::new().run("sh", &[script]).unwrap_err();
        match &err {
            CollectError::Exit { code, stderr, .. } => {
                assert_eq!(*code, Some(2));
                assert_eq!(stderr, "Cannot open file");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "sh exited with status 2: Cannot open file"
        );
    }

    #[test]
    fn test_system_runner_missing_program() {
        let err = SystemRunner::new()
            .run("/nonexistent/sarjournal-tool", &[])
            .unwrap_err();
        assert!(matches!(err, CollectError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "/nonexistent/sarjournal-tool: command not found"
        );
    }
}

//! Subprocess execution for git commands
//!
//! This module wraps `git` CLI invocations as blocking subprocesses with a
//! hard timeout. The tool's exit code and stdout/stderr are the entire
//! contract: success returns captured output, non-zero exit is translated
//! into [`Error::ToolInvocationFailed`] carrying the trimmed stderr (or
//! stdout when stderr is empty), and a child that outlives the timeout is
//! killed and reported as [`Error::OperationTimedOut`].

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Sleep between child-completion polls while waiting on the deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured streams of a completed git invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Raw stdout, lossily decoded
    pub stdout: String,
    /// Raw stderr, lossily decoded
    pub stderr: String,
}

impl CommandOutput {
    /// The most informative stream for user-facing summaries: trimmed
    /// stdout, falling back to trimmed stderr when stdout is empty.
    ///
    /// Some git subcommands (notably `push`) report progress on stderr
    /// even on success.
    pub fn summary(&self) -> &str {
        let stdout = self.stdout.trim();
        if stdout.is_empty() {
            self.stderr.trim()
        } else {
            stdout
        }
    }
}

/// Blocking executor for `git` subcommands in a fixed working directory.
#[derive(Debug, Clone)]
pub struct GitCommandExecutor {
    work_dir: PathBuf,
    timeout: Duration,
}

impl GitCommandExecutor {
    /// Create an executor bound to `work_dir` with a per-invocation timeout.
    pub fn new(work_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            work_dir: work_dir.into(),
            timeout,
        }
    }

    /// The working directory every invocation runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The configured per-invocation timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `git <args>` and return trimmed stdout on success.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        self.output(args).map(|o| o.stdout.trim().to_string())
    }

    /// Run `git <args>` and return both captured streams on success.
    pub fn output(&self, args: &[&str]) -> Result<CommandOutput> {
        let command = args.join(" ");
        debug!(command = %command, dir = %self.work_dir.display(), "invoking git");

        let mut child = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Drain both pipes on dedicated threads so a chatty command cannot
        // deadlock against a full pipe buffer while we poll for exit.
        let stdout_reader = spawn_pipe_reader(child.stdout.take());
        let stderr_reader = spawn_pipe_reader(child.stderr.take());

        let status = self.wait_with_deadline(&mut child, &command)?;

        let stdout = stdout_reader.join().unwrap_or_default();
        let stderr = stderr_reader.join().unwrap_or_default();

        if status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.to_string()
            };
            debug!(command = %command, %message, "git exited non-zero");
            Err(Error::ToolInvocationFailed { command, message })
        }
    }

    /// Poll the child until it exits or the deadline passes.
    ///
    /// On timeout the child is killed and reaped before the error is
    /// returned, so no zombie process is left behind.
    fn wait_with_deadline(&self, child: &mut Child, command: &str) -> Result<ExitStatus> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                warn!(command = %command, timeout = ?self.timeout, "git command timed out");
                return Err(Error::OperationTimedOut {
                    command: command.to_string(),
                    timeout: self.timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

/// Read a child pipe to completion on a background thread.
fn spawn_pipe_reader<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut bytes = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut bytes);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

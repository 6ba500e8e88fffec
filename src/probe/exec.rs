//! Child-process execution with a bounded wait.
//!
//! Every external probe funnels through [`run_with_deadline`]: spawn the
//! child with piped stdio, drain its output on reader threads, and poll
//! `try_wait` against an `Instant` deadline. On deadline the child is killed
//! and reaped so no zombie outlives the probe.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between `try_wait` polls while waiting on a child.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Outcome of running a child process under a deadline.
#[derive(Debug)]
pub enum Execution {
    /// The child exited before the deadline.
    Completed {
        /// Exit code (None if killed by signal).
        exit_code: Option<i32>,
        /// Whether the child exited zero.
        success: bool,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },
    /// The deadline passed; the child was killed and reaped.
    TimedOut,
}

/// Run `program` with `args`, capturing output and waiting at most `timeout`.
///
/// Spawn errors surface as `Err` so callers can distinguish "tool not found"
/// (`ErrorKind::NotFound`) from other failures. Nothing is written to the
/// child's stdin.
pub fn run_with_deadline(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> std::io::Result<Execution> {
    let start = Instant::now();

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Drain pipes on threads so a chatty child can't block on a full pipe
    // while the main thread polls for exit.
    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();
    let stdout_handle = thread::spawn(move || drain(stdout_pipe));
    let stderr_handle = thread::spawn(move || drain(stderr_pipe));

    let deadline = start + timeout;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                tracing::debug!(program, ?timeout, "probe child killed after deadline");
                return Ok(Execution::TimedOut);
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    tracing::debug!(
        program,
        code = ?status.code(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "probe child exited"
    );

    Ok(Execution::Completed {
        exit_code: status.code(),
        success: status.success(),
        stdout,
        stderr,
    })
}

/// Read a pipe to completion, tolerating invalid UTF-8.
fn drain<R: Read>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

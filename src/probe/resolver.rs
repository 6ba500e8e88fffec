//! Resolver probe: ask `which` whether the tool is reachable on PATH.
//!
//! Deliberately independent of the version-query probe. A tool can be on
//! PATH but broken, or runnable via an absolute path while missing from
//! PATH, so the two signals are reported separately.

use std::time::Duration;

use crate::probe::exec::{run_with_deadline, Execution};

/// Bounded wait for the `which` lookup.
pub const RESOLVER_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the resolver-lookup probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverProbe {
    /// Resolver exited zero; `path` is the trimmed resolved path.
    Found { path: String },
    /// Resolver ran but could not resolve the tool.
    NotFound,
    /// The resolver itself could not be run, or timed out.
    Error { message: String },
}

/// Run `which <tool>` with a bounded wait and classify the outcome.
pub fn probe_resolver(tool: &str, timeout: Duration) -> ResolverProbe {
    match run_with_deadline("which", &[tool], timeout) {
        Ok(Execution::Completed {
            success: true,
            stdout,
            ..
        }) => ResolverProbe::Found {
            path: stdout.trim().to_string(),
        },
        Ok(Execution::Completed { .. }) => ResolverProbe::NotFound,
        Ok(Execution::TimedOut) => ResolverProbe::Error {
            message: format!("which timed out after {}s", timeout.as_secs()),
        },
        Err(e) => ResolverProbe::Error {
            message: e.to_string(),
        },
    }
}

//! Environment capability probes.
//!
//! Five independent, read-only checks against the host environment:
//!
//! 1. [`version::probe_version`] — run `asdf --version` under a deadline
//! 2. [`resolver::probe_resolver`] — resolve the tool via `which`
//! 3. [`locations::probe_install_dir`] — `$ASDF_DIR` or `~/.asdf`
//! 4. [`locations::probe_candidates`] — fixed build-image locations
//! 5. [`vars::probe_vars`] — the asdf environment variables
//!
//! Probes are stateless and order-insensitive; nothing here mutates the
//! environment. Only the version-query probe feeds the final verdict.

pub mod exec;
pub mod locations;
pub mod resolver;
pub mod vars;
pub mod version;

pub use exec::{run_with_deadline, Execution};
pub use locations::{
    existing_candidates, probe_candidates, probe_install_dir, probe_install_dir_with_env,
    DirProbe, CANDIDATE_LOCATIONS, INSTALL_DIR_VAR,
};
pub use resolver::{probe_resolver, ResolverProbe, RESOLVER_TIMEOUT};
pub use vars::{probe_vars, probe_vars_with_env, VarProbe, REPORTED_VARS};
pub use version::{probe_version, VersionProbe, VERSION_TIMEOUT};

//! asdf-doctor - diagnose asdf version-manager availability.
//!
//! A one-shot diagnostic for documentation build environments: it probes
//! whether `asdf` is present through five independent signals, prints a
//! human-readable report, and emits a sample Read the Docs config that
//! repeats the same checks inside an actual build container.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`doctor`] - Probe orchestration and report rendering
//! - [`emit`] - Sample Read the Docs config emission
//! - [`error`] - Error types and result aliases
//! - [`probe`] - The individual environment capability probes
//! - [`ui`] - Status icons and terminal styling
//!
//! # Example
//!
//! ```no_run
//! use asdf_doctor::probe::{probe_version, VERSION_TIMEOUT};
//!
//! let outcome = probe_version("asdf", VERSION_TIMEOUT);
//! if outcome.is_available() {
//!     println!("asdf responded to a version query");
//! }
//! ```

pub mod cli;
pub mod doctor;
pub mod emit;
pub mod error;
pub mod probe;
pub mod ui;

pub use error::{DoctorError, Result};

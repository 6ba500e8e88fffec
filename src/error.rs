//! Error types for asdf-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Probe outcomes are not errors: a missing tool or an unset variable is a
//! negative result, reported and carried in the probe's own outcome type.
//! `DoctorError` covers the paths that genuinely abort the run, which today
//! means failing to write the report output or the sample config file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for asdf-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Failed to write the sample config file.
    #[error("Failed to write sample config at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for asdf-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;

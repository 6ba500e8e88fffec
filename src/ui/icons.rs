//! Unified status vocabulary for report output.
//!
//! `StatusKind` provides the canonical pass/fail icons used by every probe
//! section, so report lines stay greppable across builds and log scrapers.

/// Icon prefixing the config-creation confirmation.
pub const NOTE: &str = "📝";

/// Icon prefixing the final conclusion line.
pub const TARGET: &str = "🎯";

/// Canonical status kinds used across report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The check found what it was looking for.
    Pass,
    /// The check came up empty or errored.
    Fail,
}

impl StatusKind {
    /// Icon for this status.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
        }
    }

    /// Format a status line: icon + message.
    pub fn format(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

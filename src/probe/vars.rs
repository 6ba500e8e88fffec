//! Environment-variable probe: report the asdf-related variables.

/// Variables reported by the probe, in report order.
pub const REPORTED_VARS: &[&str] = &["ASDF_DIR", "ASDF_DATA_DIR", "ASDF_CONFIG_FILE"];

/// Reported state of a single environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarProbe {
    /// Variable name.
    pub name: &'static str,
    /// Value when set and non-empty, `None` otherwise.
    pub value: Option<String>,
}

/// Probe the reported variables from the actual environment.
pub fn probe_vars() -> Vec<VarProbe> {
    probe_vars_with_env(|key: &str| std::env::var(key))
}

/// Probe the reported variables with a custom env var lookup function.
///
/// An empty value counts as unset, matching how activation scripts treat
/// these variables.
pub fn probe_vars_with_env<F>(env_fn: F) -> Vec<VarProbe>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    REPORTED_VARS
        .iter()
        .map(|&name| VarProbe {
            name,
            value: env_fn(name).ok().filter(|v| !v.is_empty()),
        })
        .collect()
}

//! Filesystem probes: the install directory and fixed fallback candidates.
//!
//! The install directory follows the same env-var-first convention version
//! managers themselves use: `$ASDF_DIR` wins when set (handles relocatable
//! installs), with `~/.asdf` as the default. The candidate list covers the
//! places build images are known to park asdf outside the home directory.

use std::path::{Path, PathBuf};

/// Env var that relocates the asdf install directory.
pub const INSTALL_DIR_VAR: &str = "ASDF_DIR";

/// Fixed locations where build images commonly place asdf.
pub const CANDIDATE_LOCATIONS: &[&str] = &[
    "/opt/asdf",
    "/usr/local/asdf",
    "/home/readthedocs/.asdf",
    "/root/.asdf",
    "/usr/share/asdf",
];

/// Existence report for a single directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirProbe {
    /// The path that was checked.
    pub path: PathBuf,
    /// Whether anything exists at that path.
    pub exists: bool,
}

/// Resolve the probed install directory.
///
/// `$ASDF_DIR` is used verbatim when set, whether or not the path exists.
/// The `~/.asdf` fallback applies only when the variable is unset.
pub fn install_dir_with_env<F>(env_fn: F) -> PathBuf
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    match env_fn(INSTALL_DIR_VAR) {
        Ok(val) => PathBuf::from(val),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/"))
            .join(".asdf"),
    }
}

/// Probe the install directory using actual environment variables.
pub fn probe_install_dir() -> DirProbe {
    probe_install_dir_with_env(|key: &str| std::env::var(key))
}

/// Probe the install directory with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn probe_install_dir_with_env<F>(env_fn: F) -> DirProbe
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let path = install_dir_with_env(env_fn);
    let exists = path.exists();
    DirProbe { path, exists }
}

/// Filter a candidate list down to the paths that exist.
pub fn existing_candidates<P: AsRef<Path>>(candidates: &[P]) -> Vec<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref().to_path_buf())
        .filter(|p| p.exists())
        .collect()
}

/// Probe the fixed candidate locations on the real filesystem.
pub fn probe_candidates() -> Vec<PathBuf> {
    existing_candidates(CANDIDATE_LOCATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn env_var_wins_even_when_path_is_missing() {
        let probe = probe_install_dir_with_env(|var| {
            if var == INSTALL_DIR_VAR {
                Ok("/nonexistent/custom-asdf".to_string())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        });

        assert_eq!(probe.path, PathBuf::from("/nonexistent/custom-asdf"));
        assert!(!probe.exists);
    }

    #[test]
    fn env_var_path_existence_is_reported() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("asdf-root");
        fs::create_dir_all(&custom).unwrap();
        let custom_str = custom.to_string_lossy().to_string();

        let probe = probe_install_dir_with_env(|var| {
            if var == INSTALL_DIR_VAR {
                Ok(custom_str.clone())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        });

        assert_eq!(probe.path, custom);
        assert!(probe.exists);
    }

    #[test]
    fn falls_back_to_home_default_when_unset() {
        let path = install_dir_with_env(|_| Err(std::env::VarError::NotPresent));
        assert!(path.ends_with(".asdf"));
    }

    #[test]
    fn existing_candidates_keeps_only_present_paths() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().join("opt-asdf");
        let absent = temp.path().join("missing-asdf");
        fs::create_dir_all(&present).unwrap();

        let found = existing_candidates(&[present.clone(), absent]);
        assert_eq!(found, vec![present]);
    }

    #[test]
    fn existing_candidates_empty_when_nothing_matches() {
        let found = existing_candidates(&[
            PathBuf::from("/nonexistent/a"),
            PathBuf::from("/nonexistent/b"),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn candidate_list_has_five_fixed_locations() {
        assert_eq!(CANDIDATE_LOCATIONS.len(), 5);
        assert!(CANDIDATE_LOCATIONS.contains(&"/home/readthedocs/.asdf"));
    }
}

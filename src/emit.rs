//! Sample Read the Docs config emission.
//!
//! The payload is a fixed template, written byte-for-byte: it must land in a
//! repository unmodified so its build commands re-run the same asdf checks
//! inside the Read the Docs container. No serializer is involved on purpose.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::DoctorError;
use crate::ui::icons;
use crate::Result;

/// Relative path the sample config is written to.
pub const SAMPLE_CONFIG_PATH: &str = ".readthedocs-test.yaml";

/// The sample config payload, written verbatim.
pub const SAMPLE_CONFIG: &str = r#"version: 2
build:
  os: ubuntu-24.04
  tools:
    python: '3.13'
  commands:
    - echo "Testing asdf availability..."
    - asdf --version || echo "asdf not available"
    - which asdf || echo "asdf not in PATH"
    - ls -la ~/.asdf || echo "asdf directory not found"
    - echo "Test completed"
"#;

/// Write the sample config to [`SAMPLE_CONFIG_PATH`] in the current
/// directory, replacing any existing file.
pub fn write_sample_config() -> Result<()> {
    write_sample_config_to(Path::new(SAMPLE_CONFIG_PATH))
}

/// Write the sample config to an explicit path, replacing any existing file.
pub fn write_sample_config_to(path: &Path) -> Result<()> {
    fs::write(path, SAMPLE_CONFIG).map_err(|source| DoctorError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the creation confirmation and how to use the config.
pub fn print_usage_hint(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} Created test config: {}",
        icons::NOTE,
        SAMPLE_CONFIG_PATH
    )?;
    writeln!(
        out,
        "You can use this to test asdf availability in Read the Docs:"
    )?;
    writeln!(out, "1. Upload this config to a test repository")?;
    writeln!(out, "2. Enable Read the Docs for that repository")?;
    writeln!(out, "3. Check the build logs for asdf availability")
}

//! The availability report: run each probe in order and print its result.
//!
//! Section writers are split from probe execution so report formatting can
//! be tested against fixed probe outcomes without touching the host
//! environment. Sections are numbered to match the report layout; removing
//! or reordering one changes user-visible output.

use std::io::Write;
use std::path::Path;

use crate::probe::{
    probe_candidates, probe_install_dir, probe_resolver, probe_vars, probe_version, DirProbe,
    ResolverProbe, VarProbe, VersionProbe, RESOLVER_TIMEOUT, VERSION_TIMEOUT,
};
use crate::ui::{DoctorTheme, StatusKind};
use crate::Result;

/// The tool every probe asks about.
pub const TOOL: &str = "asdf";

/// Run all five probes, printing each section as it completes.
///
/// Returns the verdict: whether the version-query probe judged the tool
/// available. The remaining probes are diagnostic signals only.
pub fn run_availability_test(out: &mut dyn Write, theme: &DoctorTheme) -> Result<bool> {
    writeln!(
        out,
        "{}",
        theme.header.apply_to("=== ASDF AVAILABILITY TEST ===")
    )?;

    let version = probe_version(TOOL, VERSION_TIMEOUT);
    write_version_section(out, &version)?;

    let resolver = probe_resolver(TOOL, RESOLVER_TIMEOUT);
    write_resolver_section(out, &resolver)?;

    write_install_dir_section(out, &probe_install_dir())?;
    write_candidates_section(out, &probe_candidates())?;
    write_vars_section(out, &probe_vars())?;

    let available = version.is_available();
    tracing::debug!(available, ?version, ?resolver, "probe pass finished");

    write_summary(out, theme, available)?;
    write_context_note(out, theme)?;

    Ok(available)
}

/// Section 1: the version-query probe.
pub fn write_version_section(out: &mut dyn Write, probe: &VersionProbe) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "1. Testing asdf command availability:")?;
    let line = match probe {
        VersionProbe::Available { version } => {
            StatusKind::Pass.format(&format!("asdf is available: {version}"))
        }
        VersionProbe::CommandFailed { stderr } => {
            StatusKind::Fail.format(&format!("asdf command failed: {stderr}"))
        }
        VersionProbe::NotFound => StatusKind::Fail.format("asdf command not found"),
        VersionProbe::TimedOut => StatusKind::Fail.format("asdf command timed out"),
        VersionProbe::Error { message } => {
            StatusKind::Fail.format(&format!("Error testing asdf: {message}"))
        }
    };
    writeln!(out, "{line}")
}

/// Section 2: the PATH resolver probe.
pub fn write_resolver_section(out: &mut dyn Write, probe: &ResolverProbe) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "2. Testing asdf in PATH:")?;
    let line = match probe {
        ResolverProbe::Found { path } => {
            StatusKind::Pass.format(&format!("asdf found in PATH: {path}"))
        }
        ResolverProbe::NotFound => StatusKind::Fail.format("asdf not found in PATH"),
        ResolverProbe::Error { message } => {
            StatusKind::Fail.format(&format!("Error checking PATH: {message}"))
        }
    };
    writeln!(out, "{line}")
}

/// Section 3: the install-directory probe.
pub fn write_install_dir_section(out: &mut dyn Write, probe: &DirProbe) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "3. Testing asdf directory:")?;
    let line = if probe.exists {
        StatusKind::Pass.format(&format!("asdf directory exists: {}", probe.path.display()))
    } else {
        StatusKind::Fail.format(&format!("asdf directory not found: {}", probe.path.display()))
    };
    writeln!(out, "{line}")
}

/// Section 4: the fixed candidate locations.
pub fn write_candidates_section(out: &mut dyn Write, found: &[impl AsRef<Path>]) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "4. Testing common asdf locations:")?;
    if found.is_empty() {
        writeln!(
            out,
            "{}",
            StatusKind::Fail.format("No asdf found in common locations")
        )?;
    } else {
        for location in found {
            writeln!(
                out,
                "{}",
                StatusKind::Pass.format(&format!("Found asdf at: {}", location.as_ref().display()))
            )?;
        }
    }
    Ok(())
}

/// Section 5: the asdf environment variables.
pub fn write_vars_section(out: &mut dyn Write, probes: &[VarProbe]) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "5. Testing asdf environment variables:")?;
    for probe in probes {
        let line = match &probe.value {
            Some(value) => StatusKind::Pass.format(&format!("{}: {}", probe.name, value)),
            None => StatusKind::Fail.format(&format!("{}: not set", probe.name)),
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// The verdict, derived solely from the version-query probe.
pub fn write_summary(
    out: &mut dyn Write,
    theme: &DoctorTheme,
    available: bool,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.header.apply_to("=== SUMMARY ==="))?;
    if available {
        writeln!(
            out,
            "{}",
            StatusKind::Pass.format("asdf appears to be available in this environment")
        )?;
        writeln!(out, "   The original Read the Docs config might work")?;
    } else {
        writeln!(
            out,
            "{}",
            StatusKind::Fail.format("asdf is NOT available in this environment")
        )?;
        writeln!(out, "   The original Read the Docs config would fail")?;
        writeln!(out, "   Our fix using 'pip install uv' is necessary")?;
    }
    Ok(())
}

/// Static note on why local results do not transfer to the build container.
pub fn write_context_note(out: &mut dyn Write, theme: &DoctorTheme) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        theme.header.apply_to("=== READ THE DOCS CONTEXT ===")
    )?;
    writeln!(out, "Note: This test runs in the current environment.")?;
    writeln!(
        out,
        "Read the Docs uses Ubuntu 24.04 containers which may differ."
    )?;
    writeln!(
        out,
        "The safest approach is to avoid asdf dependency entirely."
    )
}

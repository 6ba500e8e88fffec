//! asdf-doctor CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use asdf_doctor::cli::Cli;
use asdf_doctor::ui::{icons, DoctorTheme};
use asdf_doctor::{doctor, emit};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("asdf_doctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("asdf_doctor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("asdf-doctor starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }
    let theme = if cli.no_color {
        DoctorTheme::plain()
    } else {
        DoctorTheme::new()
    };

    match run(&theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// The probing pass, then the config-emission pass. Both run unconditionally.
fn run(theme: &DoctorTheme) -> asdf_doctor::Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "Testing asdf availability in current environment...")?;
    let available = doctor::run_availability_test(&mut out, theme)?;

    writeln!(out)?;
    writeln!(out, "{}", theme.dim.apply_to("=".repeat(50)))?;

    emit::write_sample_config()?;
    emit::print_usage_hint(&mut out)?;

    let verdict = if available {
        "asdf is available"
    } else {
        "asdf is NOT available"
    };
    writeln!(out)?;
    writeln!(out, "{} CONCLUSION: {}", icons::TARGET, verdict)?;
    writeln!(
        out,
        "Our fix using 'pip install uv' is the safest approach regardless."
    )?;

    Ok(())
}

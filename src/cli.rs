//! CLI argument definitions.
//!
//! asdf-doctor takes no subcommands: a bare invocation runs the probing pass
//! and then the config-emission pass, unconditionally. The flags here only
//! affect presentation and logging, never probe semantics.

use clap::Parser;

/// asdf-doctor - diagnose asdf availability in build environments.
#[derive(Debug, Parser)]
#[command(name = "asdf-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

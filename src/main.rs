// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! mediamigrate: numbered image folder migration
//!
//! Copies the images of every `I-*` folder under the media root into
//! `<output>/<zero-padded prefix>/`. Root and output are fixed.

use clap::Parser;
use tracing::{debug, info};

use mediamigrate::{MigrateConfig, Migrator, Result, TracingReporter};

/// mediamigrate CLI - regroup numbered images into padded folders
#[derive(Parser, Debug)]
#[command(name = "mediamigrate")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version = "1.0.0")]
#[command(about = "Copy I-* image folders into zero-padded prefix folders", long_about = None)]
struct Cli {
    /// Enable verbose logging (debug level, shows every copied file)
    #[arg(short, long)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long)]
    trace: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        if self.trace {
            "trace"
        } else if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_target(false)
        .init();

    let migrator = Migrator::new(MigrateConfig::default());
    debug!("Configuration: {:?}", migrator.config());

    let summary = migrator.run(&mut TracingReporter)?;
    info!("Summary: {}", summary);

    Ok(())
}

//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Fixture generator binary

use anyhow::Context;
use clap::Parser;
use fixture_generator::{cli::Cli, generate_fixtures, init_tracing, FIXTURE_GENERATOR_VERSION};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    info!("Starting fixture generator v{}", FIXTURE_GENERATOR_VERSION);

    let config = cli
        .resolve_config()
        .context("Failed to load configuration")?;
    let summary =
        generate_fixtures(config, cli.dry_run).context("Invalid fixture generator configuration")?;

    info!(
        "Created {} of {} project(s), {} failed",
        summary.succeeded, summary.requested, summary.failed
    );
    Ok(())
}

//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Project fixture generator
//!
//! Synthesizes randomized project metadata and drives an external
//! fixture-creation tool (`episko_cli create -n ...`) once per record, so
//! that a directory tree of test projects can be seeded in one command.
//!
//! ## Flow
//!
//! - **Sampling**: [`RecordGenerator`] draws a [`ProjectRecord`] from a seeded RNG
//! - **Arguments**: [`build_arguments`] maps the record onto tool flags
//! - **Invocation**: a [`FixtureTool`] runs the tool and reports the outcome
//! - **Loop**: [`FixtureGenerator::run`] repeats the above and never aborts early

pub mod arguments;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixture;
pub mod generators;
pub mod models;
pub mod runner;

// Re-export commonly used types
pub use arguments::build_arguments;
pub use config::{GeneratorConfig, PropertyCatalog};
pub use error::{FixtureError, FixtureResult};
pub use fixture::{FixtureGenerator, RunSummary};
pub use generators::RecordGenerator;
pub use models::{sanitize_title, ProjectRecord, Versioned};
pub use runner::{DryRunTool, ExternalTool, FixtureTool, Invocation, InvocationOutcome};

/// Fixture generator version
pub const FIXTURE_GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins over `level` when it is set.
pub fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Run the generator with a fully resolved configuration
pub fn generate_fixtures(config: GeneratorConfig, dry_run: bool) -> FixtureResult<RunSummary> {
    let count = config.count;
    let base_dir = config.base_dir.clone();
    let program = config.tool.clone();
    let records = RecordGenerator::new(config)?;

    tracing::info!(
        "Generating {} fixture(s) under {} with {}",
        count,
        base_dir.display(),
        program
    );

    let summary = if dry_run {
        FixtureGenerator::new(records, DryRunTool::new(program)).run(count, &base_dir)
    } else {
        FixtureGenerator::new(records, ExternalTool::new(program)).run(count, &base_dir)
    };

    Ok(summary)
}

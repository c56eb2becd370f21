//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Command-line interface for fixture generation

use crate::config::GeneratorConfig;
use crate::error::FixtureResult;
use crate::DEFAULT_LOG_LEVEL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fixture-generator")]
#[command(about = "Seed randomized project fixtures through an external tool")]
#[command(version)]
pub struct Cli {
    /// Number of test projects to create
    #[arg(long)]
    pub count: Option<usize>,

    /// Base directory where project directories will be created
    #[arg(long = "base", value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Fixture tool executable
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Random seed (time based when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log the tool command lines without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Resolve defaults, the optional config file and flag overrides
    pub fn resolve_config(&self) -> FixtureResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(tool) = &self.tool {
            config.tool = tool.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Configuration management for fixture generation
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides applied by the binary.

use crate::error::{FixtureError, FixtureResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of records per run
pub const DEFAULT_COUNT: usize = 5;

/// Default fixture-creation executable
pub const DEFAULT_TOOL: &str = "episko_cli";

/// Default presence probability for optional record fields
pub const DEFAULT_OPTIONAL_PROBABILITY: f64 = 0.5;

/// Main configuration for fixture generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records to generate
    pub count: usize,

    /// Base directory that project directories are created under
    pub base_dir: PathBuf,

    /// Fixture tool executable, resolved through `PATH` when not absolute
    pub tool: String,

    /// Random seed; a time-based seed is used when absent
    pub seed: Option<u64>,

    /// Probability that description, IDE and repository URL are present
    pub optional_probability: f64,

    /// Language names and version policy
    pub languages: PropertyCatalog,

    /// Build system names and version policy
    pub build_systems: PropertyCatalog,

    /// IDE names and version policy
    pub ides: PropertyCatalog,
}

/// Names a versioned property is drawn from, plus the highest major version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyCatalog {
    pub names: Vec<String>,
    pub max_major: u32,
}

impl PropertyCatalog {
    pub fn new(names: &[&str], max_major: u32) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            max_major,
        }
    }

    fn validate(&self, label: &str) -> FixtureResult<()> {
        if self.names.is_empty() {
            return Err(FixtureError::Config(format!("{} catalog is empty", label)));
        }
        if self.names.iter().any(|name| name.trim().is_empty()) {
            return Err(FixtureError::Config(format!(
                "{} catalog contains a blank name",
                label
            )));
        }
        if self.max_major == 0 {
            return Err(FixtureError::Config(format!(
                "{} max_major must be at least 1",
                label
            )));
        }
        Ok(())
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file, filling gaps with defaults
    pub fn from_file(path: &Path) -> FixtureResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| FixtureError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check the configuration for values that would make sampling impossible
    pub fn validate(&self) -> FixtureResult<()> {
        if self.tool.trim().is_empty() {
            return Err(FixtureError::Config("tool must not be empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.optional_probability) {
            return Err(FixtureError::Config(format!(
                "optional_probability must be within [0, 1], got {}",
                self.optional_probability
            )));
        }

        self.languages.validate("languages")?;
        self.build_systems.validate("build_systems")?;
        self.ides.validate("ides")?;

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            base_dir: PathBuf::from("."),
            tool: DEFAULT_TOOL.to_string(),
            seed: None,
            optional_probability: DEFAULT_OPTIONAL_PROBABILITY,
            languages: PropertyCatalog::new(
                &["Go", "Python", "JavaScript", "TypeScript", "Rust", "Java", "C#"],
                5,
            ),
            build_systems: PropertyCatalog::new(
                &["Make", "CMake", "Gradle", "Maven", "Webpack", "Bazel"],
                3,
            ),
            ides: PropertyCatalog::new(
                &["VSCode", "IntelliJ", "Vim", "Emacs", "Atom", "Sublime"],
                2,
            ),
        }
    }
}

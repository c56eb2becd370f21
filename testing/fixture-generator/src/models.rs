//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Data models for generated project records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Version placeholder used when a property has no version
pub const UNKNOWN_VERSION: &str = "unknown";

/// A named property with an optional version, rendered as `name:version`
///
/// Equality and hashing follow the rendered key, so an explicit `unknown`
/// version equals a missing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Versioned {
    pub name: String,
    pub version: Option<String>,
}

impl Versioned {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version: version.filter(|version| version != UNKNOWN_VERSION),
        }
    }

    pub fn with_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, Some(version.into()))
    }

    /// Version as rendered, `unknown` when absent
    pub fn version_key(&self) -> &str {
        self.version.as_deref().unwrap_or(UNKNOWN_VERSION)
    }
}

impl PartialEq for Versioned {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.version_key() == other.version_key()
    }
}

impl Eq for Versioned {}

impl Hash for Versioned {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.version_key().hash(state);
    }
}

impl fmt::Display for Versioned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.version_key())
    }
}

/// One synthesized project description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Human-readable application name
    pub title: String,

    /// Project directory, `base_dir` joined with the sanitized title
    pub directory: PathBuf,

    pub description: Option<String>,
    pub categories: Vec<String>,

    /// Unique `name:version` keys, 1 to 3 entries
    pub languages: Vec<Versioned>,

    /// Unique `name:version` keys, 0 to 2 entries
    pub build_systems: Vec<Versioned>,

    pub preferred_ide: Option<Versioned>,
    pub repository_url: Option<String>,
}

impl ProjectRecord {
    /// Create a record with only the title and its derived directory set
    pub fn new(title: impl Into<String>, base_dir: &Path) -> Self {
        let title = title.into();
        let directory = base_dir.join(sanitize_title(&title));

        Self {
            title,
            directory,
            description: None,
            categories: Vec::new(),
            languages: Vec::new(),
            build_systems: Vec::new(),
            preferred_ide: None,
            repository_url: None,
        }
    }
}

/// Turn a title into a single filesystem path segment
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

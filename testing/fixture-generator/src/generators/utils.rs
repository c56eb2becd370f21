//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Sampling helpers shared by the record generator
//!
//! This module provides seeding, unique-set sampling, version synthesis and
//! small text helpers used when building project records.

use crate::config::PropertyCatalog;
use crate::error::{FixtureError, FixtureResult};
use crate::models::Versioned;
use rand::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;

/// Upper bound on draws while filling a unique set
pub const MAX_DRAW_ATTEMPTS: usize = 10_000;

/// Highest minor version component
pub const MAX_MINOR: u32 = 9;

/// Seed from the configuration, or from the wall clock when absent
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    })
}

/// Draw values until `target` distinct ones have been collected
///
/// Values keep the order in which they were first drawn. A target of zero
/// performs no draws.
pub fn sample_unique<R, T, F>(rng: &mut R, target: usize, mut draw: F) -> FixtureResult<Vec<T>>
where
    R: Rng + ?Sized,
    T: Eq + Hash + Clone,
    F: FnMut(&mut R) -> T,
{
    let mut seen = HashSet::with_capacity(target);
    let mut values = Vec::with_capacity(target);
    let mut attempts = 0;

    while values.len() < target {
        if attempts == MAX_DRAW_ATTEMPTS {
            return Err(FixtureError::SamplingExhausted {
                target,
                found: values.len(),
                attempts,
            });
        }
        attempts += 1;

        let value = draw(&mut *rng);
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }

    Ok(values)
}

/// Synthesize a `major.minor` version string
pub fn random_version<R: Rng + ?Sized>(rng: &mut R, max_major: u32) -> String {
    format!(
        "{}.{}",
        rng.gen_range(1..=max_major.max(1)),
        rng.gen_range(0..=MAX_MINOR)
    )
}

/// Pick a catalog name, versioned with the given probability
pub fn random_versioned<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &PropertyCatalog,
    version_probability: f64,
) -> Versioned {
    let name = catalog.names.choose(rng).cloned().unwrap_or_default();
    let version = rng
        .gen_bool(version_probability)
        .then(|| random_version(rng, catalog.max_major));

    Versioned::new(name, version)
}

/// Uppercase the first character of a word
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Project record generator
//!
//! Draws every field of a [`ProjectRecord`] independently from one seeded
//! random source owned by the generator.

use super::utils::{capitalize, random_version, random_versioned, resolve_seed, sample_unique};
use crate::config::GeneratorConfig;
use crate::error::FixtureResult;
use crate::models::{ProjectRecord, Versioned};
use fake::faker::company::en::{Buzzword, BuzzwordMiddle, BuzzwordTail};
use fake::faker::internet::en::DomainSuffix;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use rand::prelude::*;
use std::ops::RangeInclusive;
use std::path::Path;

/// Number of categories per record
pub const CATEGORY_COUNT: RangeInclusive<usize> = 0..=3;

/// Number of distinct languages per record
pub const LANGUAGE_COUNT: RangeInclusive<usize> = 1..=3;

/// Number of distinct build systems per record
pub const BUILD_SYSTEM_COUNT: RangeInclusive<usize> = 0..=2;

/// Words per generated description
const DESCRIPTION_WORDS: usize = 10;

/// Probability that a language or build system carries a version
const VERSION_PROBABILITY: f64 = 0.5;

/// Generator for project records
pub struct RecordGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    seed: u64,
}

impl RecordGenerator {
    /// Create a new record generator from a validated configuration
    pub fn new(config: GeneratorConfig) -> FixtureResult<Self> {
        config.validate()?;

        let seed = resolve_seed(config.seed);
        tracing::info!("Seeding record generator with {}", seed);

        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Seed the random source was initialised with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate one record rooted at `base_dir`
    pub fn generate_record(&mut self, base_dir: &Path) -> FixtureResult<ProjectRecord> {
        let title = self.generate_title();
        self.generate_record_titled(title, base_dir)
    }

    /// Fill in every field except the title, which the caller already drew
    pub fn generate_record_titled(
        &mut self,
        title: String,
        base_dir: &Path,
    ) -> FixtureResult<ProjectRecord> {
        let mut record = ProjectRecord::new(title, base_dir);

        record.description = self.maybe(|rng| {
            Sentence(DESCRIPTION_WORDS..DESCRIPTION_WORDS + 1).fake_with_rng(rng)
        });
        record.categories = self.generate_categories();
        record.languages = self.generate_languages()?;
        record.build_systems = self.generate_build_systems()?;

        let ides = self.config.ides.clone();
        record.preferred_ide = self.maybe(|rng| {
            let name = ides.names.choose(rng).cloned().unwrap_or_default();
            Versioned::with_version(name, random_version(rng, ides.max_major))
        });
        record.repository_url = self.maybe(generate_url);

        Ok(record)
    }

    /// Application-style name such as "Real-time Groupware" or "Quasiomnis"
    pub fn generate_title(&mut self) -> String {
        let rng = &mut self.rng;
        match rng.gen_range(0..3) {
            0 => format!(
                "{} {}",
                capitalize(&BuzzwordMiddle().fake_with_rng::<String, _>(rng)),
                capitalize(&BuzzwordTail().fake_with_rng::<String, _>(rng))
            ),
            1 => format!(
                "{}{}",
                capitalize(&Word().fake_with_rng::<String, _>(rng)),
                Word().fake_with_rng::<String, _>(rng)
            ),
            _ => format!(
                "{} {}",
                capitalize(&Buzzword().fake_with_rng::<String, _>(rng)),
                capitalize(&Word().fake_with_rng::<String, _>(rng))
            ),
        }
    }

    fn generate_categories(&mut self) -> Vec<String> {
        let count = self.rng.gen_range(CATEGORY_COUNT);
        (0..count)
            .map(|_| Word().fake_with_rng::<String, _>(&mut self.rng))
            .collect()
    }

    fn generate_languages(&mut self) -> FixtureResult<Vec<Versioned>> {
        let target = self.rng.gen_range(LANGUAGE_COUNT);
        let catalog = &self.config.languages;
        sample_unique(&mut self.rng, target, |rng| {
            random_versioned(rng, catalog, VERSION_PROBABILITY)
        })
    }

    fn generate_build_systems(&mut self) -> FixtureResult<Vec<Versioned>> {
        let target = self.rng.gen_range(BUILD_SYSTEM_COUNT);
        let catalog = &self.config.build_systems;
        sample_unique(&mut self.rng, target, |rng| {
            random_versioned(rng, catalog, VERSION_PROBABILITY)
        })
    }

    /// Produce a value with the configured optional-field probability
    fn maybe<T>(&mut self, produce: impl FnOnce(&mut StdRng) -> T) -> Option<T> {
        if self.rng.gen_bool(self.config.optional_probability) {
            Some(produce(&mut self.rng))
        } else {
            None
        }
    }
}

fn generate_url(rng: &mut StdRng) -> String {
    let host: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    let path: String = Word().fake_with_rng(rng);
    format!("https://www.{}.{}/{}", host, suffix, path)
}

//! Run configuration for the grid benchmark.
//!
//! The binary always runs with [`BenchConfig::default`]. The builder methods
//! and the YAML loaders exist for harnesses and tests that need a smaller
//! iteration count or a different seed.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: 1
//! iterations: 100000000
//! # an integer pins the seed; `~` draws a fresh one from entropy
//! seed: 1
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Outer loop count used by the binary.
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// Seed matching C `rand()` before any `srand` call.
pub const DEFAULT_SEED: u64 = 1;

/// How the grid's pseudo-random generator is seeded.
///
/// Serialized as an optional integer: a number is [`SeedPolicy::Fixed`],
/// `null` is [`SeedPolicy::Entropy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum SeedPolicy {
    /// Same grid on every run of the same build.
    Fixed(u64),
    /// Fresh seed per run.
    Entropy,
}

impl SeedPolicy {
    /// Build a generator for this policy.
    pub fn rng(self) -> fastrand::Rng {
        match self {
            SeedPolicy::Fixed(seed) => fastrand::Rng::with_seed(seed),
            SeedPolicy::Entropy => fastrand::Rng::new(),
        }
    }
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Fixed(DEFAULT_SEED)
    }
}

impl From<Option<u64>> for SeedPolicy {
    fn from(value: Option<u64>) -> Self {
        value.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed)
    }
}

impl From<SeedPolicy> for Option<u64> {
    fn from(value: SeedPolicy) -> Self {
        match value {
            SeedPolicy::Fixed(seed) => Some(seed),
            SeedPolicy::Entropy => None,
        }
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedPolicy::Fixed(seed) => write!(f, "fixed({seed})"),
            SeedPolicy::Entropy => f.write_str("entropy"),
        }
    }
}

/// Parameters of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Configuration schema version.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Number of outer loop passes. Each pass adds one source row into row 0.
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// Seeding of the grid fill.
    #[serde(default)]
    pub seed: SeedPolicy,
}

impl BenchConfig {
    /// Create a configuration with the binary's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer loop count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the seed policy.
    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: BenchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version < 1 {
            return Err(ConfigError::InvalidVersion {
                version: self.version,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            iterations: default_iterations(),
            seed: SeedPolicy::default(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}

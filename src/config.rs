//! Runtime configuration for projection, routing and allocation.
//!
//! Every value has a default, so [`Config::default`] is a working setup.
//! Values can be overridden from the environment (a `.env` file is read
//! first, if one exists):
//!
//! ```bash
//! HWYNET_PROJECT_NUM_LINKS=5
//! HWYNET_PROJECT_DIST_THRESHOLD=100.0
//! HWYNET_ROUTING_STRATEGY=skim   # or `direct`
//! HWYNET_STATIONARY_THRESHOLD=0.1
//! ```

use crate::error::ConfigurationError;
use crate::route::{DirectStrategy, RoutingIndex, SkimStrategy};

use either::Either;
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

const DEFAULT_PROJECT_NUM_LINKS: usize = 5;
const DEFAULT_PROJECT_DIST_THRESHOLD: f64 = 100.0; // network length units (feet)
const DEFAULT_STATIONARY_THRESHOLD: f64 = 0.1; // seconds

const ENV_PROJECT_NUM_LINKS: &str = "HWYNET_PROJECT_NUM_LINKS";
const ENV_PROJECT_DIST_THRESHOLD: &str = "HWYNET_PROJECT_DIST_THRESHOLD";
const ENV_ROUTING_STRATEGY: &str = "HWYNET_ROUTING_STRATEGY";
const ENV_STATIONARY_THRESHOLD: &str = "HWYNET_STATIONARY_THRESHOLD";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// The most candidate links considered for a single position.
    pub max_candidates: usize,

    /// Links further than this from the position are never candidates.
    pub distance_threshold: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_PROJECT_NUM_LINKS,
            distance_threshold: DEFAULT_PROJECT_DIST_THRESHOLD,
        }
    }
}

/// Which routing strategy backs the [`PathResolver`](crate::route::PathResolver).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Lookups against the precomputed skim and predecessor matrices.
    #[default]
    Skim,
    /// A fresh least-cost search on the graph for every query.
    Direct,
}

/// The strategy produced by [`StrategyKind::select`].
pub type ConfiguredStrategy<'a> = Either<SkimStrategy<'a>, DirectStrategy>;

impl StrategyKind {
    /// Resolves the configured kind into a concrete strategy.
    ///
    /// The skim strategy borrows the routing index, and fails if none was built.
    pub fn select(
        self,
        index: Option<&RoutingIndex>,
    ) -> Result<ConfiguredStrategy<'_>, ConfigurationError> {
        match self {
            StrategyKind::Skim => index
                .map(|index| Either::Left(SkimStrategy::new(index)))
                .ok_or(ConfigurationError::MissingIndex),
            StrategyKind::Direct => Ok(Either::Right(DirectStrategy)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub strategy: StrategyKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Paths whose free-flow time falls below this many seconds are treated
    /// as stationary, and share the observed time equally between links.
    pub stationary_threshold: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            stationary_threshold: DEFAULT_STATIONARY_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub projection: ProjectionConfig,
    pub routing: RoutingConfig,
    pub allocation: AllocationConfig,
}

impl Config {
    /// Builds a configuration from defaults, overridden by the environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        if let Err(err) = dotenv::dotenv() {
            debug!("No .env file loaded: {err}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from defaults, overridden by any key the
    /// `lookup` resolves.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_PROJECT_NUM_LINKS) {
            config.projection.max_candidates = parse(ENV_PROJECT_NUM_LINKS, &value)?;
        }

        if let Some(value) = lookup(ENV_PROJECT_DIST_THRESHOLD) {
            config.projection.distance_threshold = parse(ENV_PROJECT_DIST_THRESHOLD, &value)?;
        }

        if let Some(value) = lookup(ENV_ROUTING_STRATEGY) {
            config.routing.strategy = parse(ENV_ROUTING_STRATEGY, &value)?;
        }

        if let Some(value) = lookup(ENV_STATIONARY_THRESHOLD) {
            config.allocation.stationary_threshold = parse(ENV_STATIONARY_THRESHOLD, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Rejects values no query could work with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.projection.max_candidates == 0 {
            return Err(invalid(ENV_PROJECT_NUM_LINKS, self.projection.max_candidates));
        }

        let threshold = self.projection.distance_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(invalid(ENV_PROJECT_DIST_THRESHOLD, threshold));
        }

        let stationary = self.allocation.stationary_threshold;
        if !stationary.is_finite() || stationary <= 0.0 {
            return Err(invalid(ENV_STATIONARY_THRESHOLD, stationary));
        }

        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigurationError> {
    value.trim().parse::<T>().map_err(|_| invalid(key, value))
}

fn invalid(key: &'static str, value: impl ToString) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

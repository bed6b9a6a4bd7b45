#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use log::debug;
use crate::catalog::{self, RngType, DEFAULT_SEED};
use crate::error::Result;
use crate::rng::Rng;

/// Generator selection as supplied by a surrounding tool, from flags, files or
/// wherever it keeps its settings. Missing fields fall back to the catalog defaults.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RngConfig {
    /// Catalog name of the algorithm. Defaults to mt19937.
    pub algorithm: Option<String>,
    /// Seed. Defaults to 0, which selects the algorithm's own default seed.
    pub seed: Option<u64>,
}

impl RngConfig {
    pub fn new() -> Self {
        RngConfig::default()
    }

    pub fn with_algorithm<S: Into<String>>(mut self, name: S) -> Self {
        self.algorithm = Some(name.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolves the configured algorithm.
    pub fn rng_type(&self) -> Result<&'static RngType> {
        match &self.algorithm {
            Some(name) => catalog::lookup(name),
            None => Ok(catalog::default_type()),
        }
    }

    /// Allocates and seeds the configured generator.
    pub fn build(&self) -> Result<Rng> {
        let ty = self.rng_type()?;
        let seed = self.seed.unwrap_or(DEFAULT_SEED);
        debug!("building {} from config, seed {}", ty.name(), seed);
        Ok(Rng::with_seed(ty, seed))
    }
}

//! Settings shared by the hypothesis tests and interval estimates

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::distribution::Comparison;
use crate::error::{Error, Result};
use crate::rand_util::{self, Rng};

/// Resampling configuration
///
/// Missing fields take their default values when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of replicates to draw
    pub nresamples: usize,
    /// Confidence level of the interval estimates
    pub confidence_level: f64,
    /// Threshold below which a p-value is considered significant
    pub significance_level: f64,
    /// Direction of the hypothesis tests
    pub comparison: Comparison,
    /// Seed of the random generator, `None` draws a fresh seed on every run
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            nresamples: 10_000,
            confidence_level: 0.95,
            significance_level: 0.05,
            comparison: Comparison::GreaterOrEqual,
            seed: None,
        }
    }
}

impl Config {
    /// Changes the number of replicates
    pub fn nresamples(mut self, n: usize) -> Config {
        self.nresamples = n;
        self
    }

    /// Changes the confidence level of the interval estimates
    ///
    /// *Note:* A value of `0.95` reads the 2.5th and 97.5th percentiles
    pub fn confidence_level(mut self, cl: f64) -> Config {
        self.confidence_level = cl;
        self
    }

    /// Changes the [significance level](https://en.wikipedia.org/wiki/Statistical_significance)
    pub fn significance_level(mut self, sl: f64) -> Config {
        self.significance_level = sl;
        self
    }

    pub fn comparison(mut self, comparison: Comparison) -> Config {
        self.comparison = comparison;
        self
    }

    pub fn seed(mut self, seed: u64) -> Config {
        self.seed = Some(seed);
        self
    }

    /// Checks every setting, reporting the first invalid one
    pub fn validate(&self) -> Result<()> {
        if self.nresamples == 0 {
            return Err(Error::NoReplicates);
        }

        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(Error::ConfidenceLevelOutOfRange(self.confidence_level));
        }

        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(Error::SignificanceLevelOutOfRange(self.significance_level));
        }

        Ok(())
    }

    /// Parses a JSON configuration and validates it
    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    /// Loads a JSON configuration file and validates it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|inner| Error::AccessError {
            path: path.to_owned(),
            inner,
        })?;
        let config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;

        Ok(config)
    }

    /// Returns the random generator described by `seed`
    pub fn rng(&self) -> Rng {
        match self.seed {
            Some(seed) => rand_util::seeded(seed),
            None => rand_util::new_rng(),
        }
    }

    /// The lower and upper percentiles of the central interval at `confidence_level`
    pub fn percentile_bounds(&self) -> (f64, f64) {
        (
            50. * (1. - self.confidence_level),
            50. * (1. + self.confidence_level),
        )
    }
}

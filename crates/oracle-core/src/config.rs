//! Configuration for an oracle session.

use std::path::PathBuf;

use oracle_dice::RngRoller;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::OracleResult;
use crate::oracle::Oracle;
use crate::table::TableSet;

/// Where tables come from and how randomness is seeded.
#[derive(Debug, Clone, Default)]
pub struct OracleConfig {
    /// RNG seed for reproducible rolls; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Table file to load; `None` uses the built-in tables.
    pub tables: Option<PathBuf>,
}

impl OracleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the table file.
    pub fn with_tables(mut self, path: impl Into<PathBuf>) -> Self {
        self.tables = Some(path.into());
        self
    }

    /// Load the configured tables.
    pub fn load_tables(&self) -> OracleResult<TableSet> {
        match &self.tables {
            Some(path) => TableSet::load(path),
            None => TableSet::builtin(),
        }
    }

    /// The dice roller, seeded with `seed`.
    pub fn roller(&self) -> RngRoller {
        match self.seed {
            Some(seed) => RngRoller::seeded(seed),
            None => RngRoller::from_entropy(),
        }
    }

    /// The row-choice RNG, seeded with `seed + 1`.
    pub fn row_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        }
    }

    /// Load tables and build an oracle.
    pub fn build(&self) -> OracleResult<Oracle<RngRoller>> {
        Ok(Oracle::new(self.load_tables()?, self.roller(), self.row_rng()))
    }
}

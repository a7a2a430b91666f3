//! Named random tables loaded from YAML.
//!
//! A table file looks like:
//!
//! ```yaml
//! tables:
//!   outside:
//!     - "Rain for {1d6} hours."
//!     - "A patrol of {1d4+1} guards."
//! ```
//!
//! Tables keep the order they appear in the file.

use std::path::Path;

use indexmap::IndexMap;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};

const BUILTIN_TABLES: &str = include_str!("../tables/default.yaml");

/// A collection of named tables, each a list of entry templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSet {
    #[serde(default)]
    tables: IndexMap<String, Vec<String>>,
}

impl TableSet {
    /// Create an empty table set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table set from YAML text.
    pub fn from_yaml_str(yaml: &str) -> OracleResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> OracleResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| OracleError::TableIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// The tables bundled with the crate.
    pub fn builtin() -> OracleResult<Self> {
        Self::from_yaml_str(BUILTIN_TABLES)
    }

    /// Add or replace a table.
    pub fn insert(&mut self, name: impl Into<String>, entries: Vec<String>) {
        self.tables.insert(name.into(), entries);
    }

    /// Entries of `name`, if the table exists.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.tables.get(name).map(Vec::as_slice)
    }

    /// Entries of `name`, or [`OracleError::UnknownTable`].
    pub fn entries(&self, name: &str) -> OracleResult<&[String]> {
        self.get(name)
            .ok_or_else(|| OracleError::UnknownTable(name.to_string()))
    }

    /// Table names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// `(name, entries)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tables
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether there are no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Numbered listing of a table's raw entries, one `- N: entry` per line.
    pub fn describe(&self, name: &str) -> OracleResult<String> {
        let lines: Vec<String> = self
            .entries(name)?
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("- {}: {entry}", i + 1))
            .collect();
        Ok(lines.join("\n"))
    }

    /// Pick one row uniformly at random, as `(index, entry)`.
    pub fn choose<R: Rng>(&self, name: &str, rng: &mut R) -> OracleResult<(usize, &str)> {
        let entries = self.non_empty(name)?;
        let idx = rng.random_range(0..entries.len());
        Ok((idx, entries[idx].as_str()))
    }

    /// Pick `n` distinct rows at random, as `(index, entry)` pairs.
    pub fn choose_n<R: Rng>(
        &self,
        name: &str,
        n: usize,
        rng: &mut R,
    ) -> OracleResult<Vec<(usize, &str)>> {
        let entries = self.non_empty(name)?;
        if n > entries.len() {
            return Err(OracleError::TooManyDraws {
                table: name.to_string(),
                requested: n,
                available: entries.len(),
            });
        }
        Ok(index::sample(rng, entries.len(), n)
            .into_iter()
            .map(|idx| (idx, entries[idx].as_str()))
            .collect())
    }

    fn non_empty(&self, name: &str) -> OracleResult<&[String]> {
        let entries = self.entries(name)?;
        if entries.is_empty() {
            return Err(OracleError::EmptyTable(name.to_string()));
        }
        Ok(entries)
    }
}

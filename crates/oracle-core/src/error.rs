//! Error types for table rendering.

use std::num::ParseIntError;
use std::path::PathBuf;

use oracle_dice::DiceError;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while loading tables or rendering entries.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// A placeholder has a comparator whose right-hand side is not an integer.
    #[error("malformed comparator in \"{text}\": {source}")]
    MalformedComparator {
        /// The full placeholder text, without braces.
        text: String,
        /// Why the threshold did not parse.
        source: ParseIntError,
    },

    /// The dice evaluator rejected an expression.
    #[error("invalid dice expression \"{expr}\": {source}")]
    InvalidDiceExpression {
        /// The dice text handed to the evaluator.
        expr: String,
        /// The evaluator's error.
        source: DiceError,
    },

    /// No table has the requested name.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The table exists but has no rows.
    #[error("table '{0}' has no entries")]
    EmptyTable(String),

    /// More distinct rows were requested than the table holds.
    #[error("cannot draw {requested} entries from '{table}' ({available} available)")]
    TooManyDraws {
        /// The table name.
        table: String,
        /// How many rows were requested.
        requested: usize,
        /// How many rows the table has.
        available: usize,
    },

    /// A table file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    TableIo {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A table file is not valid table YAML.
    #[error("invalid table file: {0}")]
    TableParse(#[from] serde_yaml::Error),
}

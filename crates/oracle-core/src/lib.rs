//! Random-table rendering for Oracle.
//!
//! Table entries carry dice placeholders such as `{2d6}` or `{1d20>15}`.
//! [`render::Renderer`] scans a template for placeholders, splits off an
//! optional comparison, rolls the dice through a [`DiceRoller`] and splices
//! each result back into the text. [`table::TableSet`] loads tables from
//! YAML and [`oracle::Oracle`] ties row choice and rendering together.

pub mod comparator;
pub mod config;
pub mod error;
pub mod oracle;
pub mod render;
pub mod scanner;
pub mod table;

pub use comparator::{Comparator, Comparison, ParsedExpression};
pub use config::OracleConfig;
pub use error::{OracleError, OracleResult};
pub use oracle::{Oracle, TableRoll};
pub use oracle_dice::{DiceRoller, RngRoller, ScriptedRoller};
pub use render::Renderer;
pub use scanner::PlaceholderSpan;
pub use table::TableSet;

pub mod list;
pub mod render;
pub mod roll;
pub mod show;

use tracing::info;

use oracle_core::{Oracle, OracleConfig, RngRoller, TableSet};

/// Build the oracle from the configured tables and seed.
pub fn build_oracle(config: &OracleConfig) -> Result<Oracle<RngRoller>, String> {
    let oracle = config.build().map_err(|e| e.to_string())?;
    info!(
        tables = oracle.tables().len(),
        seed = ?config.seed,
        "oracle ready"
    );
    Ok(oracle)
}

/// Load the configured tables without building an oracle.
fn load_tables(config: &OracleConfig) -> Result<TableSet, String> {
    let tables = config.load_tables().map_err(|e| e.to_string())?;
    match &config.tables {
        Some(path) => info!(path = %path.display(), tables = tables.len(), "loaded table file"),
        None => info!(tables = tables.len(), "using built-in tables"),
    }
    Ok(tables)
}

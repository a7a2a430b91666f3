use colored::Colorize;
use oracle_core::OracleConfig;

pub fn run(config: &OracleConfig, name: &str) -> Result<(), String> {
    let tables = super::load_tables(config)?;
    let listing = tables.describe(name).map_err(|e| e.to_string())?;

    println!("{}", name.bold());
    if listing.is_empty() {
        println!("  (no rows)");
    } else {
        println!("{listing}");
    }

    Ok(())
}

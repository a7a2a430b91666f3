use colored::Colorize;
use oracle_core::OracleConfig;

pub fn run(config: &OracleConfig, table: &str, count: usize, json: bool) -> Result<(), String> {
    let mut oracle = super::build_oracle(config)?;
    let rolls = oracle
        .roll_table_n(table, count)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&rolls).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for roll in &rolls {
        println!("{} {}", format!("{}#{}", roll.table, roll.row).dimmed(), roll.text);
    }

    Ok(())
}

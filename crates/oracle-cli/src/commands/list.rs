use comfy_table::{ContentArrangement, Table};
use oracle_core::OracleConfig;

pub fn run(config: &OracleConfig) -> Result<(), String> {
    let tables = super::load_tables(config)?;

    if tables.is_empty() {
        println!("  No tables found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Rows", "First row"]);

    for (name, entries) in tables.iter() {
        let first = match entries.first() {
            Some(entry) if entry.chars().count() > 60 => {
                let cut: String = entry.chars().take(57).collect();
                format!("{cut}...")
            }
            Some(entry) => entry.clone(),
            None => "—".to_string(),
        };
        table.add_row(vec![name.to_string(), entries.len().to_string(), first]);
    }

    println!("{table}");
    println!();
    println!("  {} tables", tables.len());

    Ok(())
}

use oracle_core::{OracleConfig, Renderer};

pub fn run(config: &OracleConfig, template: &str) -> Result<(), String> {
    let mut renderer = Renderer::new(config.roller());
    let rendered = renderer.render(template).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}

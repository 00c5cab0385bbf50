//! CLI interface for listing discovered colors
use std::path::Path;

use anyhow::Context;

use crate::scanner::scan_file;

pub fn execute(input: &Path, json: bool) -> anyhow::Result<()> {
    let colors = scan_file(input)
        .with_context(|| format!("failed to scan {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&colors)?);
        return Ok(());
    }

    if colors.is_empty() {
        println!("No colors found in the input file");
        return Ok(());
    }

    for color in &colors {
        println!("{:>5}  {:<32} {}", color.line(), color.name(), color.original());
    }
    println!();
    println!("Found {} unique colors", colors.len());

    Ok(())
}

//! CLI interface for variable creation
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{DOCUMENT, LOOKING_GLASS, PALETTE, print_done, print_step};
use crate::create::{CreateOptions, create_variables};

pub fn execute(
    input: &Path,
    output_dir: Option<PathBuf>,
    format: Option<&str>,
    output_file: Option<String>,
    output_variable_file: Option<String>,
) -> anyhow::Result<()> {
    let format = format.map(super::parse_format).transpose()?;
    let options = CreateOptions {
        output_dir,
        format,
        output_file,
        output_variable_file,
    };

    let start = Instant::now();
    print_step(1, 2, LOOKING_GLASS, &format!("Scanning {}...", input.display()));

    let report = create_variables(input, &options)
        .with_context(|| format!("failed to create variables from {}", input.display()))?;

    let Some(paths) = &report.paths else {
        println!("No colors found in the input file");
        return Ok(());
    };

    println!("Found {} unique colors", report.colors.len());
    if let Some(format) = report.format {
        println!("{PALETTE}Converted all colors to {format} format");
    }

    print_step(2, 2, DOCUMENT, "Writing output files");
    println!("Generated variables file: {}", paths.variables.display());
    println!("Generated modified file: {}", paths.substituted.display());

    print_done(start.elapsed());
    Ok(())
}

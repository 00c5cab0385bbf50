//! Declarations and substituted-source output
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Two artifacts are produced from a scan:
//! - a `:root` block declaring one custom property per color
//! - a copy of the source with each literal replaced by `var(--color-...)`

mod substitute;

pub use substitute::reference_for;

use std::path::Path;

use substitute::Substitutions;

use crate::error::Result;
use crate::scanner::DiscoveredColor;

/// Build the `:root` declarations block.
///
/// ```
/// use tincture::prelude::*;
///
/// let colors = scan_str("a { color: #ff0000; }");
/// assert_eq!(write_declarations(&colors), ":root {\n  --color-ff0000: #ff0000;\n}\n");
/// ```
#[must_use]
pub fn write_declarations(records: &[DiscoveredColor]) -> String {
    let mut out = String::from(":root {\n");
    for record in records {
        out.push_str(&format!("  {}: {};\n", record.name(), record.value()));
    }
    out.push_str("}\n");
    out
}

/// Import line placed at the top of nested-dialect (SCSS) output.
#[must_use]
pub fn import_header(declarations_stem: &str) -> String {
    format!("@import '{declarations_stem}';\n\n")
}

/// Rewrite source text so every discovered literal becomes a reference.
///
/// Substitution is keyed by each record's original text, not its value.
/// When `import` is set (nested stylesheet dialect), the output starts with
/// an import of that declarations file. Every output line ends in `\n`.
#[must_use]
pub fn write_substituted(source: &str, records: &[DiscoveredColor], import: Option<&str>) -> String {
    let substitutions = Substitutions::new(records);

    let mut out = String::with_capacity(source.len());
    if let Some(stem) = import {
        out.push_str(&import_header(stem));
    }
    for line in source.lines() {
        out.push_str(&substitutions.apply(line));
        out.push('\n');
    }
    out
}

/// Write the declarations artifact to `path`.
pub fn generate_variables_file<P: AsRef<Path>>(records: &[DiscoveredColor], path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, write_declarations(records))?;
    tracing::info!("Wrote {} declarations to {:?}", records.len(), path);
    Ok(())
}

/// Read `input`, substitute literals and write the result to `output`.
pub fn generate_substituted_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    records: &[DiscoveredColor],
    output: Q,
    import: Option<&str>,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let source = std::fs::read_to_string(input)?;
    std::fs::write(output, write_substituted(&source, records, import))?;

    tracing::info!("Wrote substituted copy of {:?} to {:?}", input, output);
    Ok(())
}

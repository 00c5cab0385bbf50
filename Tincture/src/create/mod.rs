//! End-to-end run: scan a stylesheet, optionally convert, write artifacts
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod paths;

pub use paths::{Dialect, OutputPaths, SUBSTITUTED_SUFFIX, VARIABLES_SUFFIX};

use std::path::{Path, PathBuf};

use crate::color::ColorFormat;
use crate::converter::convert_all_to;
use crate::error::Result;
use crate::generator::{generate_substituted_file, generate_variables_file};
use crate::scanner::{DiscoveredColor, scan_file};

/// Options for [`create_variables`]
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Directory for both artifacts (created if missing); defaults to the
    /// input's directory
    pub output_dir: Option<PathBuf>,
    /// Rewrite every declared value into this format
    pub format: Option<ColorFormat>,
    /// File name override for the substituted copy
    pub output_file: Option<String>,
    /// File name override for the declarations file
    pub output_variable_file: Option<String>,
}

/// Outcome of [`create_variables`]
#[derive(Debug, Clone)]
pub struct CreateReport {
    /// Unique colors, in first-occurrence order
    pub colors: Vec<DiscoveredColor>,
    /// Format the values were converted to, if any
    pub format: Option<ColorFormat>,
    /// Written artifacts; `None` when no colors were found
    pub paths: Option<OutputPaths>,
}

impl CreateReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Scan `input` and write the declarations and substituted artifacts.
///
/// Nothing is written when the input has no color literals. Output files
/// are undefined if this returns an error part way through.
pub fn create_variables<P: AsRef<Path>>(input: P, options: &CreateOptions) -> Result<CreateReport> {
    let input = input.as_ref();

    let mut colors = scan_file(input)?;
    if colors.is_empty() {
        tracing::warn!("No colors found in {:?}", input);
        return Ok(CreateReport {
            colors,
            format: options.format,
            paths: None,
        });
    }

    if let Some(format) = options.format {
        convert_all_to(&mut colors, format);
    }

    if let Some(dir) = &options.output_dir {
        std::fs::create_dir_all(dir)?;
    }

    let paths = OutputPaths::resolve(input, options);
    let import = Dialect::from_path(input)
        .is_nested()
        .then(|| paths.import_target());

    generate_variables_file(&colors, &paths.variables)?;
    generate_substituted_file(input, &colors, &paths.substituted, import.as_deref())?;

    Ok(CreateReport {
        colors,
        format: options.format,
        paths: Some(paths),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_without_colors_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("plain.css");
        std::fs::write(&input, "body { margin: 0; }\n").unwrap();

        let report = create_variables(&input, &CreateOptions::default()).unwrap();
        assert!(report.is_empty());
        assert!(report.paths.is_none());
        assert!(!temp.path().join("plain-variables.css").exists());
        assert!(!temp.path().join("plain-with-variables.css").exists());
    }

    #[test]
    fn test_create_missing_input() {
        let temp = TempDir::new().unwrap();
        let err = create_variables(temp.path().join("nope.css"), &CreateOptions::default())
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}

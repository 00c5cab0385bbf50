//! Output naming and stylesheet dialect detection

use std::path::{Path, PathBuf};

use super::CreateOptions;

/// Suffix appended to the input stem for the declarations file.
pub const VARIABLES_SUFFIX: &str = "-variables";
/// Suffix appended to the input stem for the substituted copy.
pub const SUBSTITUTED_SUFFIX: &str = "-with-variables";

/// Stylesheet flavor of the input, detected from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain CSS (and anything unrecognized)
    Css,
    /// SCSS; output needs an `@import` of the declarations
    Scss,
}

impl Dialect {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("scss") => Self::Scss,
            _ => Self::Css,
        }
    }

    /// Whether the substituted output must import the declarations.
    #[must_use]
    pub fn is_nested(self) -> bool {
        matches!(self, Self::Scss)
    }
}

/// Where the two artifacts of a run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Declarations (`:root { ... }`) file
    pub variables: PathBuf,
    /// Substituted copy of the input
    pub substituted: PathBuf,
}

impl OutputPaths {
    /// Resolve artifact paths for `input`.
    ///
    /// Files go into `output_dir` when set, otherwise next to the input.
    /// Default names keep the input extension:
    /// `theme.scss` -> `theme-variables.scss`, `theme-with-variables.scss`.
    #[must_use]
    pub fn resolve(input: &Path, options: &CreateOptions) -> Self {
        let base_dir = options
            .output_dir
            .clone()
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_default();

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = input
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let variables = options
            .output_variable_file
            .clone()
            .unwrap_or_else(|| format!("{stem}{VARIABLES_SUFFIX}{ext}"));
        let substituted = options
            .output_file
            .clone()
            .unwrap_or_else(|| format!("{stem}{SUBSTITUTED_SUFFIX}{ext}"));

        Self {
            variables: base_dir.join(variables),
            substituted: base_dir.join(substituted),
        }
    }

    /// Name the substituted file imports, i.e. the declarations file stem.
    #[must_use]
    pub fn import_target(&self) -> String {
        self.variables
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

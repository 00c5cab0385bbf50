//! # Tincture
//!
//! Pulls color literals out of CSS/SCSS stylesheets and turns them into
//! custom properties.
//!
//! ## What it does
//!
//! - **Scan** - find every `#hex`, `rgb(...)` and `rgba(...)` literal,
//!   deduplicated in first-occurrence order
//! - **Name** - derive a stable `--color-*` name from each literal's text
//! - **Convert** - optionally rewrite every value to hex, rgb or rgba
//! - **Generate** - write a `:root` declarations file and a copy of the
//!   source that uses `var(--color-*)` references
//!
//! ## Quick Start
//!
//! ```no_run
//! use tincture::create::{CreateOptions, create_variables};
//!
//! let report = create_variables("theme.scss", &CreateOptions::default())?;
//! println!("Found {} unique colors", report.colors.len());
//! # Ok::<(), tincture::Error>(())
//! ```
//!
//! ### Working in memory
//!
//! ```
//! use tincture::prelude::*;
//!
//! let source = ".btn { color: #ff0000; border-color: rgb(0, 255, 0); }";
//! let mut colors = scan_str(source);
//! convert_all(&mut colors, "rgba")?;
//!
//! let declarations = write_declarations(&colors);
//! assert!(declarations.contains("--color-ff0000: rgba(255, 0, 0, 1.00);"));
//!
//! let rewritten = write_substituted(source, &colors, None);
//! assert!(rewritten.contains("color: var(--color-ff0000)"));
//! # Ok::<(), tincture::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `tincture` command-line binary

pub mod error;
pub mod color;
pub mod scanner;
pub mod converter;
pub mod generator;
pub mod create;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::color::{
        ColorFormat, Rgba, convert, convert_to, derive_name, format_from, parse_to_components,
    };
    pub use crate::scanner::{DiscoveredColor, scan_file, scan_lines, scan_reader, scan_str};
    pub use crate::converter::{convert_all, convert_all_to};
    pub use crate::generator::{
        generate_substituted_file, generate_variables_file, write_declarations, write_substituted,
    };
    pub use crate::create::{CreateOptions, CreateReport, Dialect, OutputPaths, create_variables};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

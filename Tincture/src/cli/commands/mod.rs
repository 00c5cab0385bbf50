use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod create;
pub mod scan;

#[derive(Subcommand)]
pub enum Commands {
    /// Create CSS color variables from a CSS/SCSS file
    ///
    /// Writes a file of custom properties for every color found, plus a copy
    /// of the input that uses those variables.
    Create {
        /// Stylesheet to scan
        input: PathBuf,

        /// Directory for output files (default: same as input file)
        #[arg(short = 'd', long)]
        output_dir: Option<PathBuf>,

        /// Convert all colors to the given format: hex, rgb, or rgba
        #[arg(short, long)]
        format: Option<String>,

        /// Name for the output file (default: {filename}-with-variables.{ext})
        #[arg(short, long)]
        output_file: Option<String>,

        /// Name for the output variables file (default: {filename}-variables.{ext})
        #[arg(short = 'v', long)]
        output_variable_file: Option<String>,
    },

    /// List the colors found in a stylesheet
    Scan {
        /// Stylesheet to scan
        input: PathBuf,

        /// Print the colors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a single color literal
    Convert {
        /// Color literal, e.g. "#ff0000" or "rgba(0, 0, 0, 0.5)"
        literal: String,

        /// Target format: hex, rgb, or rgba
        #[arg(short, long)]
        format: String,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Create {
                input,
                output_dir,
                format,
                output_file,
                output_variable_file,
            } => create::execute(
                input,
                output_dir.clone(),
                format.as_deref(),
                output_file.clone(),
                output_variable_file.clone(),
            ),
            Commands::Scan { input, json } => scan::execute(input, *json),
            Commands::Convert { literal, format } => convert::execute(literal, format),
        }
    }
}

/// Validate a `--format` value before any work starts.
pub(crate) fn parse_format(format: &str) -> anyhow::Result<crate::color::ColorFormat> {
    format
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid format specified. Must be one of: hex, rgb, rgba"))
}

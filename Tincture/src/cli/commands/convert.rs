//! CLI interface for single-literal conversion
use crate::color::{Rgba, convert_to};

pub fn execute(literal: &str, format: &str) -> anyhow::Result<()> {
    let format = super::parse_format(format)?;

    if Rgba::parse(literal).is_none() {
        tracing::warn!("{:?} is not a recognized color literal; treating it as black", literal);
    }

    println!("{}", convert_to(literal, format));
    Ok(())
}

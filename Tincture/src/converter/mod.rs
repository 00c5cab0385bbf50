//! Batch format conversion of discovered colors
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::color::{ColorFormat, convert_to};
use crate::error::Result;
use crate::scanner::DiscoveredColor;

/// Rewrite every record's value into the named format.
///
/// The format is validated before any record is touched, so an
/// `UnsupportedFormat` error leaves the records unchanged.
pub fn convert_all(records: &mut [DiscoveredColor], format: &str) -> Result<()> {
    let format: ColorFormat = format.parse()?;
    convert_all_to(records, format);
    Ok(())
}

/// Rewrite every record's value into an already-validated format.
///
/// Names and originals are left alone; record order is preserved.
pub fn convert_all_to(records: &mut [DiscoveredColor], format: ColorFormat) {
    let converted: Vec<String> = records
        .iter()
        .map(|record| convert_to(record.value(), format))
        .collect();

    for (record, value) in records.iter_mut().zip(converted) {
        record.set_value(value);
    }

    tracing::debug!("Converted {} colors to {}", records.len(), format);
}

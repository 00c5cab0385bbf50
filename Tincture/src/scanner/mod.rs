//! Stylesheet color scanning
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Walks a stylesheet line by line and collects every unique color literal,
//! in first-occurrence order. Within a line, hex literals come first, then
//! `rgb(...)`, then `rgba(...)`; each family is a separate pass over the
//! untouched line.

mod types;

pub use types::DiscoveredColor;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::color::{RGB_PATTERN, RGBA_PATTERN};
use crate::error::Result;

lazy_static! {
    /// Hex literal followed by a terminator. Group 1 ends the literal; the
    /// terminator is matched but not captured.
    static ref HEX_COLOR: Regex = Regex::new(
        r"(?i)#([0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})(?:[)\t\n\f\r ;,}]|$)"
    )
    .expect("hex color pattern is valid");
    static ref RGB_COLOR: Regex = Regex::new(RGB_PATTERN).expect("rgb color pattern is valid");
    static ref RGBA_COLOR: Regex = Regex::new(RGBA_PATTERN).expect("rgba color pattern is valid");
}

/// Color literals on one line, in reporting order (hex, rgb, rgba).
fn line_literals(line: &str) -> impl Iterator<Item = &str> {
    let hex = HEX_COLOR.captures_iter(line).filter_map(move |caps| {
        let start = caps.get(0)?.start();
        let end = caps.get(1)?.end();
        Some(&line[start..end])
    });
    let rgb = RGB_COLOR.find_iter(line).map(|m| m.as_str());
    let rgba = RGBA_COLOR.find_iter(line).map(|m| m.as_str());

    hex.chain(rgb).chain(rgba)
}

/// Scan an ordered sequence of lines.
///
/// Each literal is reported once, with the line number (1-based) of its
/// first occurrence.
pub fn scan_lines<I, S>(lines: I) -> Vec<DiscoveredColor>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found: IndexMap<String, DiscoveredColor> = IndexMap::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        for literal in line_literals(line.as_ref()) {
            if found.contains_key(literal) {
                continue;
            }
            tracing::debug!(line = line_number, literal, "Discovered color");
            found.insert(literal.to_string(), DiscoveredColor::new(literal, line_number));
        }
    }

    found.into_values().collect()
}

/// Scan stylesheet text held in memory.
///
/// ```
/// let colors = tincture::scanner::scan_str(".a { color: #ff0000; }");
/// assert_eq!(colors[0].name(), "--color-ff0000");
/// ```
#[must_use]
pub fn scan_str(text: &str) -> Vec<DiscoveredColor> {
    scan_lines(text.lines())
}

/// Scan a reader to the end.
///
/// A read error aborts the scan; no partial result is returned.
pub fn scan_reader<R: BufRead>(reader: R) -> Result<Vec<DiscoveredColor>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(scan_lines(&lines))
}

/// Scan a stylesheet file.
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<Vec<DiscoveredColor>> {
    let path = path.as_ref();
    tracing::debug!("Scanning {:?} for colors", path);

    let file = File::open(path)?;
    let colors = scan_reader(BufReader::new(file))?;

    tracing::debug!("Found {} unique colors in {:?}", colors.len(), path);
    Ok(colors)
}

//! Types produced by a stylesheet scan

use serde::Serialize;

use crate::color::derive_name;

/// A unique color literal found in a stylesheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiscoveredColor {
    /// Exact literal text as written in the source
    original: String,
    /// Custom-property name derived from `original`
    name: String,
    /// Declared value; starts as `original`, may be rewritten by a conversion
    value: String,
    /// 1-based line of the first occurrence
    line: usize,
}

impl DiscoveredColor {
    /// Record a literal first seen on `line`.
    #[must_use]
    pub fn new(original: impl Into<String>, line: usize) -> Self {
        let original = original.into();
        Self {
            name: derive_name(&original),
            value: original.clone(),
            original,
            line,
        }
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

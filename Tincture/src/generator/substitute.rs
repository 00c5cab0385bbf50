//! Literal-to-reference substitution

use std::collections::HashMap;

use regex::{Captures, Regex, RegexBuilder};

use crate::scanner::DiscoveredColor;

/// Compiled-size ceiling for the alternation; large tables exceed the
/// `regex` default.
const ALTERNATION_SIZE_LIMIT: usize = 256 * (1 << 20);

/// `var(...)` reference to a custom property.
#[must_use]
pub fn reference_for(name: &str) -> String {
    format!("var({name})")
}

/// Replacement table keyed by original literal text.
pub(super) struct Substitutions {
    /// Every original, longest first, as one alternation
    matcher: Option<Regex>,
    /// Original literal to `var(...)` reference
    references: HashMap<String, String>,
    /// Originals longest first; only walked when the alternation failed to build
    fallback: Vec<String>,
}

impl Substitutions {
    pub(super) fn new(records: &[DiscoveredColor]) -> Self {
        let references: HashMap<String, String> = records
            .iter()
            .map(|record| (record.original().to_string(), reference_for(record.name())))
            .collect();

        // Longest first so `#fff` never claims the front of `#ffffff`
        let mut originals: Vec<String> = references.keys().cloned().collect();
        originals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        if originals.is_empty() {
            return Self {
                matcher: None,
                references,
                fallback: originals,
            };
        }

        let alternation = originals
            .iter()
            .map(|original| regex::escape(original))
            .collect::<Vec<_>>()
            .join("|");

        match RegexBuilder::new(&alternation)
            .size_limit(ALTERNATION_SIZE_LIMIT)
            .dfa_size_limit(ALTERNATION_SIZE_LIMIT)
            .build()
        {
            Ok(matcher) => Self {
                matcher: Some(matcher),
                references,
                fallback: Vec::new(),
            },
            Err(err) => {
                tracing::warn!(
                    "Falling back to a literal walk for {} colors: {}",
                    originals.len(),
                    err
                );
                Self {
                    matcher: None,
                    references,
                    fallback: originals,
                }
            }
        }
    }

    /// Replace every literal occurrence in one left-to-right pass.
    ///
    /// Inserted references are never rescanned.
    pub(super) fn apply(&self, line: &str) -> String {
        match &self.matcher {
            Some(matcher) => matcher
                .replace_all(line, |caps: &Captures<'_>| {
                    self.references
                        .get(&caps[0])
                        .cloned()
                        .unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned(),
            None => self.apply_walk(line),
        }
    }

    fn apply_walk(&self, line: &str) -> String {
        if self.fallback.is_empty() {
            return line.to_string();
        }

        let mut out = String::with_capacity(line.len());
        let mut rest = line;

        while let Some(ch) = rest.chars().next() {
            let hit = self
                .fallback
                .iter()
                .find(|original| rest.starts_with(original.as_str()));

            if let Some(original) = hit {
                out.push_str(&self.references[original]);
                rest = &rest[original.len()..];
            } else {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }

        out
    }
}

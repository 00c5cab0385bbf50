//! Custom-property names for color literals
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use lazy_static::lazy_static;
use regex::Regex;

/// Prefix shared by every generated custom property.
pub const NAME_PREFIX: &str = "--color-";

lazy_static! {
    static ref DASH_RUN: Regex = Regex::new("-+").expect("dash run pattern is valid");
}

/// Derive the custom-property name for a literal.
///
/// The name depends only on the literal text. Names for `rgb(...)` and
/// `rgba(...)` literals always end in a single `-`, hex names never do;
/// existing stylesheets match on that shape, so it must not change.
///
/// ```
/// use tincture::color::derive_name;
///
/// assert_eq!(derive_name("#FF0000"), "--color-ff0000");
/// assert_eq!(derive_name("rgb(0, 255, 0)"), "--color-rgb-0-255-0-");
/// assert_eq!(derive_name("rgba(0, 0, 255, 0.5)"), "--color-rgba-0-0-255-0-5-");
/// ```
#[must_use]
pub fn derive_name(literal: &str) -> String {
    let flattened = literal
        .to_lowercase()
        .replace('#', "")
        .replace(['(', ')'], "-")
        .replace(", ", "-")
        .replace(',', "-")
        .replace('.', "-")
        .replace(' ', "-");

    let mut name = DASH_RUN.replace_all(&flattened, "-").into_owned();

    if !name.starts_with(NAME_PREFIX) {
        name.insert_str(0, NAME_PREFIX);
    }

    if name.contains("-rgb") {
        name.truncate(name.trim_end_matches('-').len());
        name.push('-');
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hex_names() {
        assert_eq!(derive_name("#ff0000"), "--color-ff0000");
        assert_eq!(derive_name("#FFF"), "--color-fff");
        assert_eq!(derive_name("#11223344"), "--color-11223344");
    }

    #[test]
    fn test_functional_names_keep_trailing_dash() {
        assert_eq!(derive_name("rgb(255, 0, 0)"), "--color-rgb-255-0-0-");
        assert_eq!(derive_name("rgba(255, 0, 0, 0.5)"), "--color-rgba-255-0-0-0-5-");
        assert_eq!(derive_name("rgb( 1 ,  2,3 )"), "--color-rgb-1-2-3-");
        assert_eq!(derive_name("rgba(0,0,0,1)"), "--color-rgba-0-0-0-1-");
    }

    #[test]
    fn test_names_are_stable() {
        let literal = "rgba(12, 34, 56, 0.78)";
        assert_eq!(derive_name(literal), derive_name(literal));
    }

    #[test]
    fn test_distinct_values_never_collide() {
        let mut literals = Vec::new();
        for r in [0, 1, 12, 123, 255] {
            for g in [0, 2, 23, 234] {
                literals.push(format!("#{r:02x}{g:02x}00"));
                literals.push(format!("rgb({r}, {g}, 0)"));
                for a in ["0", "1", "0.5", "0.05", "0.55"] {
                    literals.push(format!("rgba({r}, {g}, 0, {a})"));
                }
            }
        }
        literals.push("#abc".to_string());
        literals.push("#abcd".to_string());
        literals.push("rgb(1, 23, 4)".to_string());
        literals.push("rgb(12, 3, 4)".to_string());

        let names: HashSet<String> = literals.iter().map(|l| derive_name(l)).collect();
        assert_eq!(names.len(), literals.len());
    }
}

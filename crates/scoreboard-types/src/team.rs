//! Team identity.
//!
//! Team names keep the casing they were given but compare ordinally and
//! case-insensitively: each `char` is folded through its simple uppercase
//! mapping. Characters whose uppercase form expands to several characters
//! (e.g. `ß` → `SS`) are compared as-is. No locale data is consulted, so two
//! names compare the same way on every machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of a match a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Away => write!(f, "Away"),
        }
    }
}

/// Simple (one-to-one) uppercase folding of a single character.
#[must_use]
pub fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Ordinal case-insensitive equality of two team names.
#[must_use]
pub fn names_equal(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// Whether a team name carries no usable content (empty or all whitespace).
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

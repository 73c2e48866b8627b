//! Widening thresholds (jump sets).
//!
//! A plain interval widening sends every growing bound straight to infinity. Guided widening
//! instead jumps to the next constant of a finite [`Thresholds`] set, which keeps loop bounds
//! such as `i < 100` precise while still terminating: each bound can only jump through the
//! finitely many thresholds before reaching infinity.
//!
//! # Usage
//!
//! ```rust
//! use exdomain::domain::Thresholds;
//!
//! let thresholds: Thresholds = "100, 0, 10".parse()?;
//! assert_eq!(thresholds.ceiling(11), Some(100));
//! assert_eq!(thresholds.floor(-1), None);
//! # Ok::<(), exdomain::Error>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// An immutable, sorted and deduplicated set of widening thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Thresholds {
    /// Threshold values in ascending order, without duplicates.
    values: Vec<i64>,
}

impl Thresholds {
    /// Creates a threshold set from arbitrary values.
    ///
    /// The values are sorted and duplicates are removed.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Creates an empty threshold set, for which guided widening behaves like plain widening.
    #[must_use]
    pub const fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the number of thresholds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set contains no thresholds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the thresholds in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Returns the smallest threshold greater than or equal to `value`.
    #[must_use]
    pub fn ceiling(&self, value: i64) -> Option<i64> {
        let idx = self.values.partition_point(|&t| t < value);
        self.values.get(idx).copied()
    }

    /// Returns the largest threshold less than or equal to `value`.
    #[must_use]
    pub fn floor(&self, value: i64) -> Option<i64> {
        let idx = self.values.partition_point(|&t| t <= value);
        idx.checked_sub(1).and_then(|i| self.values.get(i).copied())
    }
}

impl FromIterator<i64> for Thresholds {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl FromStr for Thresholds {
    type Err = Error;

    /// Parses a comma-separated list of integers, e.g. `"0, 10, 100"`.
    ///
    /// Blank input yields the empty set.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::empty());
        }

        let mut values = Vec::new();
        for entry in s.split(',') {
            let entry = entry.trim();
            let value = entry
                .parse::<i64>()
                .map_err(|source| Error::InvalidThreshold {
                    value: entry.to_string(),
                    source,
                })?;
            values.push(value);
        }

        let parsed = values.len();
        let thresholds = Self::new(values);
        if thresholds.len() < parsed {
            log::debug!(
                "dropped {} duplicate widening threshold(s)",
                parsed - thresholds.len()
            );
        }

        Ok(thresholds)
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

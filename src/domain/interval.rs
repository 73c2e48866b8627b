//! Integer interval domain over a single variable.
//!
//! [`Interval`] tracks the possible values of one integer variable as a closed range whose
//! bounds may be infinite:
//!
//! - **Constant ranges**: `[5, 5]`, printed as `5`
//! - **Bounded ranges**: `[0, 255]`
//! - **Half-open ranges**: `[0, +∞)`, `(-∞, 10]`
//! - **Full range**: `(-∞, +∞)`, the top element
//!
//! # Lattice Structure
//!
//! ```text
//!          (-∞, +∞)  top
//!           /     \
//!      [a, b]     [c, d]   bounded ranges
//!           \     /
//!           [x, x]   constant
//!              |
//!              ⊥   bottom (unreachable)
//! ```
//!
//! The domain has infinite ascending chains (`[0, 1] ⊑ [0, 2] ⊑ ...`), so fixpoint iteration
//! relies on [`AbstractDomain::widen_with`], or on the guided widening of
//! [`ThresholdWidening`] with a [`Thresholds`] jump set.
//!
//! # Usage
//!
//! ```rust
//! use exdomain::domain::{AbstractDomain, Interval};
//!
//! let mut x = Interval::constant(0);
//! x.widen_with(&Interval::bounded(0, 1));
//! assert_eq!(x, Interval::at_least(0));
//! assert_eq!(x.to_string(), "[0, +∞)");
//! ```

use std::{
    cmp::{max, min},
    fmt,
};

use crate::domain::{AbstractDomain, ThresholdWidening, Thresholds};

/// The bounds of a non-empty interval.
///
/// `None` stands for negative infinity in `min` and positive infinity in `max`. Instances are
/// only created through [`Interval`] constructors, which guarantee `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: Option<i64>,
    max: Option<i64>,
}

impl Bounds {
    const FULL: Self = Self {
        min: None,
        max: None,
    };

    /// Minimum value (inclusive), `None` for negative infinity.
    #[must_use]
    pub const fn min(&self) -> Option<i64> {
        self.min
    }

    /// Maximum value (inclusive), `None` for positive infinity.
    #[must_use]
    pub const fn max(&self) -> Option<i64> {
        self.max
    }

    fn contains(&self, other: &Self) -> bool {
        let min_ok = match (self.min, other.min) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => a <= b,
        };
        let max_ok = match (self.max, other.max) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => b <= a,
        };
        min_ok && max_ok
    }

    fn hull(&self, other: &Self) -> Self {
        let lo = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(min(a, b)),
            _ => None,
        };
        let hi = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(max(a, b)),
            _ => None,
        };
        Self { min: lo, max: hi }
    }
}

/// A range of possible values of a single integer variable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    /// No possible values (unreachable code).
    Bottom,

    /// All values within the given bounds.
    Range(Bounds),
}

impl Interval {
    /// Creates a constant (singleton) interval `[value, value]`.
    #[must_use]
    pub const fn constant(value: i64) -> Self {
        Self::Range(Bounds {
            min: Some(value),
            max: Some(value),
        })
    }

    /// Creates a bounded interval `[min, max]`, or bottom if `min > max`.
    #[must_use]
    pub const fn bounded(min: i64, max: i64) -> Self {
        if min > max {
            Self::Bottom
        } else {
            Self::Range(Bounds {
                min: Some(min),
                max: Some(max),
            })
        }
    }

    /// Creates the half-open interval `[min, +∞)`.
    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self::Range(Bounds {
            min: Some(min),
            max: None,
        })
    }

    /// Creates the half-open interval `(-∞, max]`.
    #[must_use]
    pub const fn at_most(max: i64) -> Self {
        Self::Range(Bounds {
            min: None,
            max: Some(max),
        })
    }

    /// Builds an interval from optional bounds, collapsing inverted bounds to bottom.
    fn from_bounds(min: Option<i64>, max: Option<i64>) -> Self {
        match (min, max) {
            (Some(a), Some(b)) if a > b => Self::Bottom,
            _ => Self::Range(Bounds { min, max }),
        }
    }

    /// Returns the bounds, or `None` for bottom.
    #[must_use]
    pub const fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Bottom => None,
            Self::Range(bounds) => Some(*bounds),
        }
    }

    /// Returns the finite minimum, or `None` if unbounded below or bottom.
    #[must_use]
    pub fn min(&self) -> Option<i64> {
        self.bounds().and_then(|b| b.min)
    }

    /// Returns the finite maximum, or `None` if unbounded above or bottom.
    #[must_use]
    pub fn max(&self) -> Option<i64> {
        self.bounds().and_then(|b| b.max)
    }

    /// Returns the value if this is a singleton interval.
    #[must_use]
    pub fn as_constant(&self) -> Option<i64> {
        match self.bounds() {
            Some(Bounds {
                min: Some(a),
                max: Some(b),
            }) if a == b => Some(a),
            _ => None,
        }
    }

    /// Returns `true` if `value` may be held by the variable.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        match self {
            Self::Bottom => false,
            Self::Range(b) => b.min.is_none_or(|m| m <= value) && b.max.is_none_or(|m| value <= m),
        }
    }

    /// Interval addition, `[a, b] + [c, d] = [a + c, b + d]`.
    ///
    /// A bound that overflows becomes infinite.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Bottom, _) | (_, Self::Bottom) => Self::Bottom,
            (Self::Range(a), Self::Range(b)) => {
                let min = match (a.min, b.min) {
                    (Some(x), Some(y)) => x.checked_add(y),
                    _ => None,
                };
                let max = match (a.max, b.max) {
                    (Some(x), Some(y)) => x.checked_add(y),
                    _ => None,
                };
                Self::Range(Bounds { min, max })
            }
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::Range(Bounds::FULL)
    }
}

impl AbstractDomain for Interval {
    fn top() -> Self {
        Self::Range(Bounds::FULL)
    }

    fn bottom() -> Self {
        Self::Bottom
    }

    fn is_bottom(&self) -> bool {
        matches!(self, Self::Bottom)
    }

    fn is_top(&self) -> bool {
        matches!(self, Self::Range(b) if *b == Bounds::FULL)
    }

    fn set_to_bottom(&mut self) {
        *self = Self::Bottom;
    }

    fn set_to_top(&mut self) {
        *self = Self::Range(Bounds::FULL);
    }

    fn leq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bottom, _) => true,
            (Self::Range(_), Self::Bottom) => false,
            (Self::Range(a), Self::Range(b)) => b.contains(a),
        }
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn join_with(&mut self, other: &Self) {
        match (*self, other) {
            (_, Self::Bottom) => {}
            (Self::Bottom, x) => *self = *x,
            (Self::Range(a), Self::Range(b)) => *self = Self::Range(a.hull(b)),
        }
    }

    fn widen_with(&mut self, other: &Self) {
        match (*self, other) {
            (_, Self::Bottom) => {}
            (Self::Bottom, x) => *self = *x,
            (Self::Range(a), Self::Range(b)) => {
                // A bound that grows jumps to infinity
                let min = match (a.min, b.min) {
                    (Some(x), Some(y)) if y < x => None,
                    (_, None) => None,
                    (min, _) => min,
                };
                let max = match (a.max, b.max) {
                    (Some(x), Some(y)) if y > x => None,
                    (_, None) => None,
                    (max, _) => max,
                };
                *self = Self::Range(Bounds { min, max });
            }
        }
    }

    fn meet_with(&mut self, other: &Self) {
        match (*self, other) {
            (Self::Bottom, _) => {}
            (_, Self::Bottom) => *self = Self::Bottom,
            (Self::Range(a), Self::Range(b)) => {
                let lo = match (a.min, b.min) {
                    (Some(x), Some(y)) => Some(max(x, y)),
                    (x, None) => x,
                    (None, y) => y,
                };
                let hi = match (a.max, b.max) {
                    (Some(x), Some(y)) => Some(min(x, y)),
                    (x, None) => x,
                    (None, y) => y,
                };
                *self = Self::from_bounds(lo, hi);
            }
        }
    }

    fn narrow_with(&mut self, other: &Self) {
        match (*self, other) {
            (Self::Bottom, _) => {}
            (_, Self::Bottom) => *self = Self::Bottom,
            (Self::Range(a), Self::Range(b)) => {
                // Only infinite bounds are refined
                let min = a.min.or(b.min);
                let max = a.max.or(b.max);
                *self = Self::from_bounds(min, max);
            }
        }
    }

    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Self::Bottom => write!(out, "⊥"),
            Self::Range(b) => match (b.min, b.max) {
                (Some(x), Some(y)) if x == y => write!(out, "{x}"),
                (Some(x), Some(y)) => write!(out, "[{x}, {y}]"),
                (Some(x), None) => write!(out, "[{x}, +∞)"),
                (None, Some(y)) => write!(out, "(-∞, {y}]"),
                (None, None) => write!(out, "(-∞, +∞)"),
            },
        }
    }

    fn name() -> String {
        "interval domain".to_string()
    }
}

impl ThresholdWidening<Thresholds> for Interval {
    fn widen_threshold_with(&mut self, other: &Self, threshold: &Thresholds) {
        match (*self, other) {
            (_, Self::Bottom) => {}
            (Self::Bottom, x) => *self = *x,
            (Self::Range(a), Self::Range(b)) => {
                // A bound that grows jumps to the next threshold beyond it, or to infinity
                let min = match (a.min, b.min) {
                    (Some(x), Some(y)) if y < x => threshold.floor(y),
                    (_, None) => None,
                    (min, _) => min,
                };
                let max = match (a.max, b.max) {
                    (Some(x), Some(y)) if y > x => threshold.ceiling(y),
                    (_, None) => None,
                    (max, _) => max,
                };
                *self = Self::Range(Bounds { min, max });
            }
        }
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_constant() {
        let r = Interval::constant(42);
        assert_eq!(r.as_constant(), Some(42));
        assert_eq!(r.min(), Some(42));
        assert_eq!(r.max(), Some(42));
        assert!(r.contains(42));
        assert!(!r.contains(41));
    }

    #[test]
    fn test_interval_bounded() {
        let r = Interval::bounded(0, 255);
        assert_eq!(r.as_constant(), None);
        assert!(r.contains(0));
        assert!(r.contains(255));
        assert!(!r.contains(256));
        assert!(!r.contains(-1));

        // Inverted bounds are empty
        assert!(Interval::bounded(10, 0).is_bottom());
    }

    #[test]
    fn test_interval_top_bottom() {
        assert!(Interval::top().is_top());
        assert!(Interval::bottom().is_bottom());
        assert!(!Interval::top().is_bottom());
        assert!(!Interval::at_least(0).is_top());
        assert_eq!(Interval::default(), Interval::top());
        assert!(!Interval::bottom().contains(0));

        let mut x = Interval::constant(3);
        x.set_to_top();
        assert!(x.is_top());
        x.set_to_bottom();
        assert!(x.is_bottom());
    }

    #[test]
    fn test_interval_leq() {
        let small = Interval::bounded(2, 5);
        let large = Interval::bounded(0, 10);

        assert!(small.leq(&large));
        assert!(!large.leq(&small));
        assert!(Interval::bottom().leq(&small));
        assert!(!small.leq(&Interval::bottom()));
        assert!(large.leq(&Interval::at_least(0)));
        assert!(!Interval::at_least(0).leq(&large));
        assert!(Interval::at_most(3).leq(&Interval::top()));
        assert!(small.equals(&Interval::bounded(2, 5)));
    }

    #[test]
    fn test_interval_join() {
        let a = Interval::bounded(0, 10);
        let b = Interval::bounded(5, 15);
        assert_eq!(a.join(&b), Interval::bounded(0, 15));

        // Bottom is the identity
        assert_eq!(a.join(&Interval::bottom()), a);
        assert_eq!(Interval::bottom().join(&a), a);

        // Unbounded sides stay unbounded
        assert_eq!(a.join(&Interval::at_most(3)), Interval::at_most(10));
    }

    #[test]
    fn test_interval_meet() {
        let a = Interval::bounded(0, 10);
        let b = Interval::bounded(5, 15);
        assert_eq!(a.meet(&b), Interval::bounded(5, 10));

        // Disjoint intervals
        let c = Interval::bounded(0, 5);
        let d = Interval::bounded(10, 15);
        assert!(c.meet(&d).is_bottom());

        assert_eq!(Interval::at_least(3).meet(&Interval::at_most(7)), Interval::bounded(3, 7));
        assert!(a.meet(&Interval::bottom()).is_bottom());
    }

    #[test]
    fn test_interval_widen() {
        let a = Interval::bounded(0, 10);
        let b = Interval::bounded(0, 20); // Growing up
        assert_eq!(a.widen(&b), Interval::at_least(0));

        let c = Interval::bounded(5, 10);
        let d = Interval::bounded(0, 10); // Growing down
        assert_eq!(c.widen(&d), Interval::at_most(10));

        // Stable bounds are kept
        assert_eq!(a.widen(&Interval::bounded(2, 8)), a);

        // An unbounded operand is still covered
        assert!(Interval::top().leq(&a.widen(&Interval::top())));

        assert_eq!(Interval::bottom().widen(&a), a);
        assert_eq!(a.widen(&Interval::bottom()), a);
    }

    #[test]
    fn test_interval_widen_threshold() {
        let thresholds = Thresholds::new([-10, 0, 100]);

        let mut x = Interval::bounded(0, 10);
        x.widen_threshold_with(&Interval::bounded(0, 11), &thresholds);
        assert_eq!(x, Interval::bounded(0, 100));

        x.widen_threshold_with(&Interval::bounded(-1, 101), &thresholds);
        assert_eq!(x, Interval::from_bounds(Some(-10), None));

        let mut y = Interval::constant(0);
        y.widen_threshold_with(&Interval::bounded(-50, 0), &Thresholds::empty());
        assert_eq!(y, Interval::at_most(0));
    }

    #[test]
    fn test_interval_narrow() {
        let mut x = Interval::at_least(0);
        x.narrow_with(&Interval::bounded(0, 10));
        assert_eq!(x, Interval::bounded(0, 10));

        // Finite bounds are not refined
        let mut y = Interval::bounded(0, 20);
        y.narrow_with(&Interval::bounded(5, 10));
        assert_eq!(y, Interval::bounded(0, 20));

        // Inconsistent refinement collapses to bottom
        let mut z = Interval::at_most(5);
        z.narrow_with(&Interval::bounded(10, 20));
        assert!(z.is_bottom());

        assert!(Interval::top().narrow(&Interval::bottom()).is_bottom());
    }

    #[test]
    fn test_interval_add() {
        let a = Interval::bounded(1, 5);
        let b = Interval::bounded(2, 3);
        assert_eq!(a.add(&b), Interval::bounded(3, 8));
        assert_eq!(a.add(&Interval::at_least(0)), Interval::at_least(1));
        assert!(a.add(&Interval::bottom()).is_bottom());

        // Overflow widens to infinity
        let big = Interval::constant(i64::MAX);
        assert_eq!(big.add(&Interval::constant(1)).max(), None);
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Interval::bottom().to_string(), "⊥");
        assert_eq!(Interval::top().to_string(), "(-∞, +∞)");
        assert_eq!(Interval::constant(7).to_string(), "7");
        assert_eq!(Interval::bounded(0, 10).to_string(), "[0, 10]");
        assert_eq!(Interval::at_least(1).to_string(), "[1, +∞)");
        assert_eq!(Interval::at_most(-1).to_string(), "(-∞, -1]");
        assert_eq!(format!("{:?}", Interval::bounded(1, 2)), "[1, 2]");
        assert_eq!(Interval::name(), "interval domain");
    }
}

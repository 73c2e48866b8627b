//! Abstract domain traits and the domains built on top of them.
//!
//! An abstract domain is a lattice of over-approximations of program states. A fixpoint engine
//! drives it by applying transfer functions and merging the results at control flow confluence
//! points. This module defines the capability contract every domain in this crate satisfies and
//! hosts the concrete domains:
//!
//! - [`exception`]: the exception channel combinator, lifting any domain into a triple of
//!   normal, caught and propagated states
//! - [`interval`]: a single-variable integer interval domain
//! - [`thresholds`]: widening jump sets used by the guided widening of [`Interval`]
//!
//! # Lattice Theory Background
//!
//! - **Partial Order**: `leq` compares elements (≤)
//! - **Join (∨)**: upper bound used at control flow merge points
//! - **Meet (∧)**: lower bound used to refine states
//! - **Widening (∇)**: upper bound that guarantees termination of ascending iterations
//! - **Narrowing (Δ)**: refinement that recovers precision after widening
//! - **Top (⊤)**: no information, every concrete state possible
//! - **Bottom (⊥)**: unreachable, no concrete state possible
//!
//! All mutating operations act in place on the receiver and take the other operand by shared
//! reference. Dispatch is static: combinators take the underlying domain as a type parameter.

use std::fmt::{self, Debug};

pub mod exception;
pub mod interval;
pub mod thresholds;

pub use exception::{Channel, ChannelSet, ExceptionAbstractDomain, ExceptionDomain};
pub use interval::Interval;
pub use thresholds::Thresholds;

/// The capability contract of an abstract domain.
///
/// Implementations must satisfy the usual lattice obligations:
///
/// - `leq` is a partial order
/// - `bottom().leq(x)` and `x.leq(top())` for every `x`
/// - `join_with` and `widen_with` are monotone and produce an upper bound of both operands
/// - repeated `widen_with` on an ascending chain stabilizes after finitely many steps
///
/// None of the operations can fail.
///
/// # Examples
///
/// ```rust
/// use exdomain::domain::{AbstractDomain, Interval};
///
/// let mut x = Interval::bounded(0, 10);
/// x.join_with(&Interval::constant(20));
///
/// assert!(Interval::constant(5).leq(&x));
/// assert_eq!(x.to_string(), "[0, 20]");
/// ```
pub trait AbstractDomain: Clone + Debug {
    /// Returns the top (⊤) element.
    fn top() -> Self;

    /// Returns the bottom (⊥) element.
    fn bottom() -> Self;

    /// Returns `true` if this is the bottom element.
    fn is_bottom(&self) -> bool;

    /// Returns `true` if this is the top element.
    fn is_top(&self) -> bool;

    /// Sets this value to bottom.
    fn set_to_bottom(&mut self);

    /// Sets this value to top.
    fn set_to_top(&mut self);

    /// Partial order comparison: `true` if `self` ≤ `other`.
    fn leq(&self, other: &Self) -> bool;

    /// Lattice equality.
    ///
    /// Must agree with [`AbstractDomain::leq`] in both directions, which is what the default
    /// implementation checks.
    fn equals(&self, other: &Self) -> bool {
        self.leq(other) && other.leq(self)
    }

    /// Joins `other` into `self`.
    fn join_with(&mut self, other: &Self);

    /// Join used for the first merge on a loop back edge.
    ///
    /// Defaults to [`AbstractDomain::join_with`].
    fn join_loop_with(&mut self, other: &Self) {
        self.join_with(other);
    }

    /// Join used for the merges of subsequent fixpoint iterations.
    ///
    /// Defaults to [`AbstractDomain::join_with`].
    fn join_iter_with(&mut self, other: &Self) {
        self.join_with(other);
    }

    /// Widens `self` with `other`.
    fn widen_with(&mut self, other: &Self);

    /// Meets `other` into `self`.
    fn meet_with(&mut self, other: &Self);

    /// Narrows `self` with `other`.
    fn narrow_with(&mut self, other: &Self);

    /// Writes a human-readable rendering of this value to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the sink itself fails.
    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Returns the name of the domain.
    fn name() -> String;

    /// Returns the join of `self` and `other` as a new value.
    #[must_use]
    fn join(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.join_with(other);
        result
    }

    /// Returns the meet of `self` and `other` as a new value.
    #[must_use]
    fn meet(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.meet_with(other);
        result
    }

    /// Returns the widening of `self` with `other` as a new value.
    #[must_use]
    fn widen(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.widen_with(other);
        result
    }

    /// Returns the narrowing of `self` with `other` as a new value.
    #[must_use]
    fn narrow(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.narrow_with(other);
        result
    }
}

/// Widening guided by a threshold value of type `T`.
///
/// The threshold (typically a finite set of constants) lets the widening pick a tighter bound
/// than infinity while still terminating.
pub trait ThresholdWidening<T: ?Sized>: AbstractDomain {
    /// Widens `self` with `other`, using `threshold` to select the widened bounds.
    fn widen_threshold_with(&mut self, other: &Self, threshold: &T);
}

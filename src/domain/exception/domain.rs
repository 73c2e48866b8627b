//! The exception channel combinator.

use std::{fmt, mem};

use rayon::prelude::*;

use crate::domain::{
    exception::{Channel, ChannelSet, ExceptionAbstractDomain},
    AbstractDomain, ThresholdWidening,
};

/// Exception abstract domain over an underlying domain `D`.
///
/// A triple `(normal, caught, propagated)` of values of `D`:
///
/// - **normal** represents the normal execution flow state
/// - **caught** represents the state of exceptions raised but not yet handled
/// - **propagated** represents the state of caught exceptions propagated through the control
///   flow graph
///
/// The value is bottom exactly when all three channels are bottom, and top exactly when all
/// three are top. All lattice operations are pointwise. `Default` is top.
///
/// # Examples
///
/// ```rust
/// use exdomain::prelude::*;
///
/// let mut state = ExceptionDomain::<Interval>::top_no_exceptions();
/// assert!(state.is_normal_flow_top());
/// assert!(state.is_caught_exceptions_bottom());
///
/// state.throw_exception();
/// assert!(state.is_normal_flow_bottom());
/// assert!(state.is_caught_exceptions_top());
/// ```
#[derive(Debug, Clone)]
pub struct ExceptionDomain<D> {
    /// Normal execution flow state.
    normal: D,
    /// Exceptions raised in the current scope, not yet routed to a handler.
    caught: D,
    /// Caught exceptions forwarded out of the current scope.
    propagated: D,
}

impl<D: AbstractDomain> ExceptionDomain<D> {
    /// Creates an abstract value from explicit channel states.
    ///
    /// # Arguments
    ///
    /// * `normal` - The normal execution flow state
    /// * `caught` - The state of exceptions raised but not yet handled
    /// * `propagated` - The state of caught exceptions propagated through the control flow graph
    #[must_use]
    pub fn new(normal: D, caught: D, propagated: D) -> Self {
        Self {
            normal,
            caught,
            propagated,
        }
    }

    /// Creates the top abstract value with no pending exceptions.
    ///
    /// The normal flow is unconstrained and both exception channels are unreachable. This is
    /// the usual state at a function entry.
    #[must_use]
    pub fn top_no_exceptions() -> Self {
        Self::new(D::top(), D::bottom(), D::bottom())
    }

    /// Returns the state of a single channel.
    #[must_use]
    pub fn channel(&self, channel: Channel) -> &D {
        match channel {
            Channel::Normal => &self.normal,
            Channel::CaughtExceptions => &self.caught,
            Channel::PropagatedExceptions => &self.propagated,
        }
    }

    /// Returns the state of a single channel for in-place update.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut D {
        match channel {
            Channel::Normal => &mut self.normal,
            Channel::CaughtExceptions => &mut self.caught,
            Channel::PropagatedExceptions => &mut self.propagated,
        }
    }

    /// Returns the set of channels that some execution may reach.
    ///
    /// The set is empty exactly when the value is bottom.
    #[must_use]
    pub fn reachable_channels(&self) -> ChannelSet {
        let mut reachable = ChannelSet::empty();
        reachable.set(ChannelSet::NORMAL, !self.normal.is_bottom());
        reachable.set(ChannelSet::CAUGHT_EXCEPTIONS, !self.caught.is_bottom());
        reachable.set(
            ChannelSet::PROPAGATED_EXCEPTIONS,
            !self.propagated.is_bottom(),
        );
        reachable
    }

    /// Consumes the value and returns `(normal, caught, propagated)`.
    #[must_use]
    pub fn into_channels(self) -> (D, D, D) {
        (self.normal, self.caught, self.propagated)
    }

    /// Joins a slice of snapshots, e.g. the states of all predecessors at a confluence point.
    ///
    /// Returns bottom for an empty slice.
    #[must_use]
    pub fn join_snapshots(snapshots: &[Self]) -> Self {
        snapshots.iter().fold(Self::bottom(), |mut acc, snapshot| {
            acc.join_with(snapshot);
            acc
        })
    }

    /// Parallel variant of [`ExceptionDomain::join_snapshots`].
    ///
    /// Produces the same result, as join is associative and commutative.
    #[must_use]
    pub fn par_join_snapshots(snapshots: &[Self]) -> Self
    where
        D: Send + Sync,
    {
        snapshots
            .par_iter()
            .fold(Self::bottom, |mut acc, snapshot| {
                acc.join_with(snapshot);
                acc
            })
            .reduce(Self::bottom, |mut acc, partial| {
                acc.join_with(&partial);
                acc
            })
    }

    /// Applies `op` channel by channel, pairing each channel with the same channel of `other`.
    fn pointwise<F>(&mut self, other: &Self, op: F)
    where
        F: Fn(&mut D, &D),
    {
        op(&mut self.normal, &other.normal);
        op(&mut self.caught, &other.caught);
        op(&mut self.propagated, &other.propagated);
    }
}

impl<D: AbstractDomain> AbstractDomain for ExceptionDomain<D> {
    fn top() -> Self {
        Self::new(D::top(), D::top(), D::top())
    }

    fn bottom() -> Self {
        Self::new(D::bottom(), D::bottom(), D::bottom())
    }

    fn is_bottom(&self) -> bool {
        self.normal.is_bottom() && self.caught.is_bottom() && self.propagated.is_bottom()
    }

    fn is_top(&self) -> bool {
        self.normal.is_top() && self.caught.is_top() && self.propagated.is_top()
    }

    fn set_to_bottom(&mut self) {
        self.normal.set_to_bottom();
        self.caught.set_to_bottom();
        self.propagated.set_to_bottom();
    }

    fn set_to_top(&mut self) {
        self.normal.set_to_top();
        self.caught.set_to_top();
        self.propagated.set_to_top();
    }

    fn leq(&self, other: &Self) -> bool {
        self.normal.leq(&other.normal)
            && self.caught.leq(&other.caught)
            && self.propagated.leq(&other.propagated)
    }

    fn equals(&self, other: &Self) -> bool {
        self.normal.equals(&other.normal)
            && self.caught.equals(&other.caught)
            && self.propagated.equals(&other.propagated)
    }

    fn join_with(&mut self, other: &Self) {
        self.pointwise(other, D::join_with);
    }

    fn join_loop_with(&mut self, other: &Self) {
        self.pointwise(other, D::join_loop_with);
    }

    fn join_iter_with(&mut self, other: &Self) {
        self.pointwise(other, D::join_iter_with);
    }

    fn widen_with(&mut self, other: &Self) {
        self.pointwise(other, D::widen_with);
    }

    fn meet_with(&mut self, other: &Self) {
        self.pointwise(other, D::meet_with);
    }

    fn narrow_with(&mut self, other: &Self) {
        self.pointwise(other, D::narrow_with);
    }

    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "({}=", Channel::Normal)?;
        self.normal.dump(out)?;
        write!(out, ", {}=", Channel::CaughtExceptions)?;
        self.caught.dump(out)?;
        write!(out, ", {}=", Channel::PropagatedExceptions)?;
        self.propagated.dump(out)?;
        write!(out, ")")
    }

    fn name() -> String {
        format!("exception domain of {}", D::name())
    }
}

impl<D, T> ThresholdWidening<T> for ExceptionDomain<D>
where
    D: ThresholdWidening<T>,
    T: ?Sized,
{
    fn widen_threshold_with(&mut self, other: &Self, threshold: &T) {
        self.pointwise(other, |lhs, rhs| lhs.widen_threshold_with(rhs, threshold));
    }
}

impl<D: AbstractDomain> ExceptionAbstractDomain for ExceptionDomain<D> {
    type Underlying = D;

    fn normal(&self) -> &D {
        &self.normal
    }

    fn normal_mut(&mut self) -> &mut D {
        &mut self.normal
    }

    fn caught_exceptions(&self) -> &D {
        &self.caught
    }

    fn caught_exceptions_mut(&mut self) -> &mut D {
        &mut self.caught
    }

    fn propagated_exceptions(&self) -> &D {
        &self.propagated
    }

    fn propagated_exceptions_mut(&mut self) -> &mut D {
        &mut self.propagated
    }

    fn enter_normal(&mut self) {
        self.caught.set_to_bottom();
        log::trace!("enter_normal -> {self}");
    }

    fn enter_catch(&mut self) {
        mem::swap(&mut self.normal, &mut self.caught);
        self.caught.set_to_bottom();
        self.propagated.set_to_bottom();
        log::trace!("enter_catch -> {self}");
    }

    fn throw_exception(&mut self) {
        self.caught.join_with(&self.normal);
        self.normal.set_to_bottom();
        log::trace!("throw_exception -> {self}");
    }

    fn resume_exception(&mut self) {
        self.caught.join_with(&self.normal);
        self.normal.set_to_bottom();
        log::trace!("resume_exception -> {self}");
    }

    fn merge_propagated_in_caught_exceptions(&mut self) {
        self.caught.join_with(&self.propagated);
        self.propagated.set_to_bottom();
        log::trace!("merge_propagated_in_caught_exceptions -> {self}");
    }

    fn merge_caught_in_propagated_exceptions(&mut self) {
        self.propagated.join_with(&self.caught);
        self.caught.set_to_bottom();
        log::trace!("merge_caught_in_propagated_exceptions -> {self}");
    }

    fn ignore_exceptions(&mut self) {
        self.caught.set_to_bottom();
        self.propagated.set_to_bottom();
        log::trace!("ignore_exceptions -> {self}");
    }
}

impl<D: AbstractDomain> Default for ExceptionDomain<D> {
    fn default() -> Self {
        Self::top()
    }
}

impl<D: AbstractDomain> PartialEq for ExceptionDomain<D> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<D: AbstractDomain> fmt::Display for ExceptionDomain<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f)
    }
}

//! Exception-aware abstract domains.
//!
//! Non-local control transfer (throw, catch, rethrow) cannot be modelled by a single abstract
//! state per program point. This module lifts an arbitrary underlying domain `D` into a triple
//! of channels:
//!
//! - **normal**: states reached through ordinary control flow
//! - **caught exceptions**: states in which an exception was raised in the current scope and
//!   has not been routed to a handler yet
//! - **propagated exceptions**: states of exceptions that were caught and are being forwarded
//!   out of the current scope, toward an enclosing handler or the caller
//!
//! The fixpoint engine applies statement transfer functions to the normal channel (through
//! [`ExceptionAbstractDomain::normal_mut`]) and calls the exception transfer operations when the
//! intermediate representation reaches a throw, a handler entry or a scope exit.
//!
//! # Exception Transfer Operations
//!
//! | Operation | Effect |
//! |---|---|
//! | `enter_normal` | `caught := ⊥` |
//! | `enter_catch` | `normal := caught`, `caught := ⊥`, `propagated := ⊥` |
//! | `throw_exception` | `caught := caught ∨ normal`, `normal := ⊥` |
//! | `resume_exception` | `caught := caught ∨ normal`, `normal := ⊥` |
//! | `merge_propagated_in_caught_exceptions` | `caught := caught ∨ propagated`, `propagated := ⊥` |
//! | `merge_caught_in_propagated_exceptions` | `propagated := propagated ∨ caught`, `caught := ⊥` |
//! | `ignore_exceptions` | `caught := ⊥`, `propagated := ⊥` |
//!
//! # Example
//!
//! ```rust
//! use exdomain::prelude::*;
//!
//! // x in [0, 10] on the normal path, no exception pending
//! let mut inv = ExceptionDomain::new(Interval::bounded(0, 10), Interval::bottom(), Interval::bottom());
//!
//! // `throw` moves the normal state into the caught channel
//! inv.throw_exception();
//! assert!(inv.is_normal_flow_bottom());
//!
//! // Entering the handler resumes normal flow from the caught state
//! inv.enter_catch();
//! assert_eq!(inv.to_string(), "(normal=[0, 10], caught_exceptions=⊥, propagated_exceptions=⊥)");
//! ```

mod channel;
mod domain;

pub use channel::{Channel, ChannelSet};
pub use domain::ExceptionDomain;

use crate::domain::AbstractDomain;

/// The interface of an abstract domain that tracks exception channels.
///
/// Implementors expose their three channels and the exception transfer operations. The channel
/// predicates and mutators are provided in terms of the accessors.
///
/// # Preconditions
///
/// The transfer operations assume they are called in the control flow order the intermediate
/// representation dictates, e.g. `enter_catch` after the protected region populated the caught
/// channel. Calling them out of order is not detected: the result is well formed but
/// meaningless.
pub trait ExceptionAbstractDomain: AbstractDomain {
    /// The domain each channel is abstracted with.
    type Underlying: AbstractDomain;

    /// Returns the normal execution flow state.
    fn normal(&self) -> &Self::Underlying;

    /// Returns the normal execution flow state for in-place update.
    fn normal_mut(&mut self) -> &mut Self::Underlying;

    /// Returns the state of exceptions raised but not yet handled.
    fn caught_exceptions(&self) -> &Self::Underlying;

    /// Returns the state of exceptions raised but not yet handled, for in-place update.
    fn caught_exceptions_mut(&mut self) -> &mut Self::Underlying;

    /// Returns the state of caught exceptions propagated through the control flow graph.
    fn propagated_exceptions(&self) -> &Self::Underlying;

    /// Returns the state of propagated exceptions for in-place update.
    fn propagated_exceptions_mut(&mut self) -> &mut Self::Underlying;

    /// Returns `true` if the normal flow is unreachable.
    fn is_normal_flow_bottom(&self) -> bool {
        self.normal().is_bottom()
    }

    /// Returns `true` if the normal flow is unconstrained.
    fn is_normal_flow_top(&self) -> bool {
        self.normal().is_top()
    }

    /// Marks the normal flow as unreachable.
    fn set_normal_flow_to_bottom(&mut self) {
        self.normal_mut().set_to_bottom();
    }

    /// Forgets everything about the normal flow.
    fn set_normal_flow_to_top(&mut self) {
        self.normal_mut().set_to_top();
    }

    /// Returns `true` if no exception is in flight.
    fn is_caught_exceptions_bottom(&self) -> bool {
        self.caught_exceptions().is_bottom()
    }

    /// Returns `true` if the caught exceptions state is unconstrained.
    fn is_caught_exceptions_top(&self) -> bool {
        self.caught_exceptions().is_top()
    }

    /// Clears the caught exceptions state.
    fn set_caught_exceptions_to_bottom(&mut self) {
        self.caught_exceptions_mut().set_to_bottom();
    }

    /// Forgets everything about the caught exceptions state.
    fn set_caught_exceptions_to_top(&mut self) {
        self.caught_exceptions_mut().set_to_top();
    }

    /// Returns `true` if no exception is being propagated.
    fn is_propagated_exceptions_bottom(&self) -> bool {
        self.propagated_exceptions().is_bottom()
    }

    /// Returns `true` if the propagated exceptions state is unconstrained.
    fn is_propagated_exceptions_top(&self) -> bool {
        self.propagated_exceptions().is_top()
    }

    /// Clears the propagated exceptions state.
    fn set_propagated_exceptions_to_bottom(&mut self) {
        self.propagated_exceptions_mut().set_to_bottom();
    }

    /// Forgets everything about the propagated exceptions state.
    fn set_propagated_exceptions_to_top(&mut self) {
        self.propagated_exceptions_mut().set_to_top();
    }

    /// Control returns to ordinary code: the in-flight exception state is cleared.
    ///
    /// The propagated exceptions are left untouched.
    fn enter_normal(&mut self);

    /// Enters an exception handler.
    ///
    /// The caught exceptions become the normal flow of the handler, and both exception channels
    /// restart empty.
    fn enter_catch(&mut self);

    /// Raises an exception: the normal flow joins the caught exceptions and becomes unreachable.
    fn throw_exception(&mut self);

    /// Resumes an exception already in flight.
    ///
    /// Currently has the same effect as [`ExceptionAbstractDomain::throw_exception`].
    fn resume_exception(&mut self);

    /// Makes the propagated exceptions eligible for local handling.
    fn merge_propagated_in_caught_exceptions(&mut self);

    /// Forwards the unhandled caught exceptions out of the current scope.
    fn merge_caught_in_propagated_exceptions(&mut self);

    /// Discards all exception path information.
    fn ignore_exceptions(&mut self);
}

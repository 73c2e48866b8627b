// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # exdomain
//!
//! An exception-aware abstract domain combinator for static program analyzers.
//!
//! Abstract interpreters compute, for every program point, an over-approximation of the
//! reachable program states. Languages with exceptions add non-local control transfer: a
//! `throw` leaves the normal path, a handler resumes it, and an unhandled exception bubbles
//! out to an enclosing scope. `exdomain` models this by lifting any underlying abstract
//! domain into a triple of channels, so the surrounding fixpoint engine can soundly follow
//! throw/catch/rethrow constructs.
//!
//! ## Features
//!
//! - **Generic combinator** - [`ExceptionDomain<D>`](domain::ExceptionDomain) works over any
//!   domain implementing [`AbstractDomain`](domain::AbstractDomain), with static dispatch
//! - **Complete lattice surface** - join, loop/iteration joins, widening, guided widening,
//!   meet and narrowing, all pointwise across the channels
//! - **Exception transfer operations** - throw, resume, handler entry, scope exit and discard
//! - **Reference interval domain** - [`Interval`](domain::Interval) with threshold widening
//! - **Stable diagnostics** - dumps usable as golden-output regression baselines
//!
//! ## Quick Start
//!
//! ```rust
//! use exdomain::prelude::*;
//!
//! // Function entry: anything may hold, no exception pending
//! let mut state = ExceptionDomain::<Interval>::top_no_exceptions();
//!
//! // A statement restricts x to [0, 10] on the normal path
//! *state.normal_mut() = Interval::bounded(0, 10);
//!
//! // `throw` inside a try block, then the handler is entered
//! state.throw_exception();
//! state.enter_catch();
//!
//! assert_eq!(*state.normal(), Interval::bounded(0, 10));
//! assert!(state.is_caught_exceptions_bottom());
//! ```
//!
//! ## Architecture
//!
//! - [`domain`] - the [`AbstractDomain`](domain::AbstractDomain) contract and the domains
//! - [`domain::exception`] - the exception channel combinator and its interface trait
//! - [`domain::interval`] - single-variable integer intervals
//! - [`domain::thresholds`] - widening jump sets
//! - [`Error`] and [`Result`] - error handling for the configuration surface
//!
//! ## Error Handling
//!
//! Lattice and transfer operations are total. Only parsing user-supplied parameters can fail:
//!
//! ```rust
//! use exdomain::{domain::Thresholds, Error};
//!
//! let err = "0, ten".parse::<Thresholds>().unwrap_err();
//! assert!(matches!(err, Error::InvalidThreshold { .. }));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade. The exception transfer
//! operations emit `trace` records with the resulting state; install any logger to see them.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use exdomain::prelude::*;
///
/// let state = ExceptionDomain::<Interval>::bottom();
/// assert!(state.is_bottom());
/// ```
pub mod prelude;

/// Abstract domain traits, the exception channel combinator and the interval domain.
pub mod domain;

/// `exdomain` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `exdomain` Error type
///
/// Only the configuration surface can fail; see the variants for the possible conditions.
pub use error::Error;

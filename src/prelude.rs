//! # exdomain Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the exdomain library. Import it to get the lattice traits in scope together with the
//! exception combinator and the interval domain.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all exdomain operations
pub use crate::Error;

/// The result type used throughout exdomain
pub use crate::Result;

// ================================================================================================
// Lattice Traits
// ================================================================================================

/// The capability contract of an abstract domain
pub use crate::domain::AbstractDomain;

/// Widening guided by a threshold value
pub use crate::domain::ThresholdWidening;

/// Interface of domains tracking exception channels
pub use crate::domain::ExceptionAbstractDomain;

// ================================================================================================
// Domains
// ================================================================================================

/// The exception channel combinator
pub use crate::domain::ExceptionDomain;

/// Channel addressing
pub use crate::domain::{Channel, ChannelSet};

/// Single-variable integer interval domain
pub use crate::domain::Interval;

/// Widening jump sets
pub use crate::domain::Thresholds;

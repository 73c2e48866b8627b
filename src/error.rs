use std::num::ParseIntError;

use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The lattice and exception-transfer operations of this crate are total and never fail. Errors
/// only arise on the configuration surface, when user-supplied text is turned into analysis
/// parameters such as a widening threshold set.
///
/// # Examples
///
/// ```rust
/// use exdomain::{domain::Thresholds, Error};
///
/// match "0, 10, ten".parse::<Thresholds>() {
///     Ok(thresholds) => println!("{} thresholds", thresholds.len()),
///     Err(Error::InvalidThreshold { value, .. }) => eprintln!("bad threshold '{value}'"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A widening threshold entry could not be parsed as a signed 64-bit integer.
    ///
    /// # Fields
    ///
    /// * `value` - The offending entry, trimmed of surrounding whitespace
    /// * `source` - The underlying integer parse error
    #[error("Invalid widening threshold '{value}': {source}")]
    InvalidThreshold {
        /// The entry that failed to parse
        value: String,
        /// The integer parse error reported for the entry
        #[source]
        source: ParseIntError,
    },
}

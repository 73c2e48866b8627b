//! Addressing of the three exception channels.

use bitflags::bitflags;
use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// One of the three control flow channels tracked by an exception domain.
///
/// The string forms are the labels used in diagnostic dumps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr,
)]
pub enum Channel {
    /// Ordinary control flow.
    #[strum(serialize = "normal")]
    Normal,

    /// Exceptions raised in the current scope and not yet routed to a handler.
    #[strum(serialize = "caught_exceptions")]
    CaughtExceptions,

    /// Caught exceptions being forwarded out of the current scope.
    #[strum(serialize = "propagated_exceptions")]
    PropagatedExceptions,
}

bitflags! {
    /// A set of exception channels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelSet: u8 {
        /// Ordinary control flow
        const NORMAL = 0x01;
        /// Exceptions in flight, not yet handled
        const CAUGHT_EXCEPTIONS = 0x02;
        /// Caught exceptions propagated outward
        const PROPAGATED_EXCEPTIONS = 0x04;
    }
}

impl From<Channel> for ChannelSet {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Normal => ChannelSet::NORMAL,
            Channel::CaughtExceptions => ChannelSet::CAUGHT_EXCEPTIONS,
            Channel::PropagatedExceptions => ChannelSet::PROPAGATED_EXCEPTIONS,
        }
    }
}

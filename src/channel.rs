//! MIDI channel numbering.
//!
//! MIDI 1.0 carries the channel in the low nibble of a channel voice status
//! byte: 0-15 on the wire, 1-16 in user-facing material. System messages have
//! no channel at all, which is expressed as `Option<Channel>::None`.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the 16 MIDI channels.
///
/// `Ch1` is wire value 0, `Ch16` is wire value 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Channel {
    Ch1 = 0,
    Ch2 = 1,
    Ch3 = 2,
    Ch4 = 3,
    Ch5 = 4,
    Ch6 = 5,
    Ch7 = 6,
    Ch8 = 7,
    Ch9 = 8,
    Ch10 = 9,
    Ch11 = 10,
    Ch12 = 11,
    Ch13 = 12,
    Ch14 = 13,
    Ch15 = 14,
    Ch16 = 15,
}

impl Channel {
    /// Returns `None` if the value is > 15.
    pub const fn from_index(index: u8) -> Option<Channel> {
        if index > 15 {
            return None;
        }
        // SAFETY: repr(u8) enum with all values 0-15 defined
        Some(unsafe { core::mem::transmute::<u8, Channel>(index) })
    }

    /// Wire value, 0-15.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Human-facing channel number, 1-16.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> u8 {
        channel as u8
    }
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Channel::from_index(index).ok_or(Error::InvalidChannel(index))
    }
}

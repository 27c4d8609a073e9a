//! Error types for the staccato crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid MIDI channel {0} (expected 0-15)")]
    InvalidChannel(u8),

    #[error("invalid controller number {0} (expected 0-127)")]
    InvalidController(u8),
}

pub type Result<T> = std::result::Result<T, Error>;

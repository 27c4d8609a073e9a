//! Streaming MIDI 1.0 wire decoder.
//!
//! `staccato` turns a raw, undelimited stream of MIDI 1.0 bytes (from a
//! UART, a USB endpoint, or a file) into fully-typed [`Message`] values, one
//! byte at a time. The caller owns the byte source and the message sink; the
//! parser owns nothing but a few bytes of decode state.
//!
//! # Features
//!
//! - **Byte-at-a-time**: feed bytes as they arrive, no framing required
//! - **Running status**: repeated messages may omit the status byte
//! - **Real-time transparency**: system real-time bytes may interrupt any
//!   message, even a SysEx block, without corrupting it
//! - **Channel mode detection**: controllers 120-127 surface as dedicated
//!   message kinds (All Notes Off, Omni On, ...)
//! - **Allocation-free**: fixed 2-byte accumulation buffer, no heap use
//!
//! # Example
//!
//! ```
//! use staccato::{Channel, Message, Parser};
//!
//! let mut parser = Parser::new();
//!
//! let mut messages = Vec::new();
//! parser.feed(&[0x90, 60, 100, 64, 100], |message| messages.push(message));
//!
//! // Two Note On messages: the second one used running status.
//! assert_eq!(messages.len(), 2);
//! assert_eq!(
//!     messages[0],
//!     Message::NoteOn { channel: Channel::Ch1, note: 60, velocity: 100 }
//! );
//! assert_eq!(messages[1].channel(), Some(Channel::Ch1));
//! ```

// Error types
pub mod error;
pub use error::{Error, Result};

// Essential types users need
pub use channel::Channel;
pub use controller::Controller;
pub use message::{Message, MessageKind};
pub use parser::Parser;

pub(crate) mod channel;
pub(crate) mod controller;
pub(crate) mod message;
pub(crate) mod parser;

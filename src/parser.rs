//! Byte-at-a-time MIDI stream parser.
//!
//! [`Parser`] consumes one raw wire byte per call and reports a complete
//! [`Message`] as soon as its final byte arrives. It implements the MIDI 1.0
//! stream grammar: running status, system real-time bytes interleaved inside
//! other messages, and SysEx framing.
//!
//! # Example
//!
//! ```
//! use staccato::{Channel, Message, Parser};
//!
//! let mut parser = Parser::new();
//! assert_eq!(parser.feed_byte(0x90), None);
//! assert_eq!(parser.feed_byte(60), None);
//! assert_eq!(
//!     parser.feed_byte(100),
//!     Some(Message::NoteOn { channel: Channel::Ch1, note: 60, velocity: 100 })
//! );
//!
//! // Running status: the next data pair completes without a new status byte.
//! assert_eq!(parser.feed_byte(64), None);
//! assert!(parser.feed_byte(100).unwrap().is_note_on());
//! ```

use tracing::trace;

use crate::channel::Channel;
use crate::controller::Controller;
use crate::message::{Message, MessageKind};

/// High bit distinguishing status bytes from data bytes.
const STATUS_BIT: u8 = 0x80;
/// High nibble of a status byte, identifying the message kind.
const STATUS_KIND_MASK: u8 = 0xF0;
/// Low nibble of a channel voice status byte, carrying the channel.
const CHANNEL_MASK: u8 = 0x0F;
/// Largest valid data byte value.
const MAX_DATA_BYTE: u8 = 0x7F;
/// No message needs more than two data bytes.
const BUFFER_SIZE: u8 = 2;

/// Streaming MIDI 1.0 decoder. One instance per independent byte stream.
///
/// Feeding a byte never allocates and never blocks; all state is a few bytes
/// of plain data. A `Parser` is exclusively owned: give each input stream
/// its own instance and serialize access to it.
///
/// Malformed input never poisons the stream: undefined bytes are skipped,
/// and a partial message is abandoned as soon as a new status byte arrives.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    /// Running status: the message kind the next data bytes belong to.
    pending: Option<MessageKind>,
    /// Channel of the pending message, for channel voice kinds.
    channel: Option<Channel>,
    /// Stored for the caller; never consulted while decoding.
    active_channel: Option<Channel>,
    /// Data bytes accumulated so far for the pending message.
    buffer: [u8; BUFFER_SIZE as usize],
    count: u8,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Discards any partially-accumulated message, running status, and the
    /// active-channel setting, returning the parser to its initial state.
    ///
    /// Call after a transport disconnect or whenever stream position is lost.
    pub fn reset(&mut self) {
        *self = Parser::default();
    }

    /// Stores a channel-of-interest for the caller to query back.
    ///
    /// This is bookkeeping only: `feed_byte` reports messages for every
    /// channel regardless of this setting. `None` means omni (all channels).
    pub fn set_active_channel(&mut self, channel: Option<Channel>) {
        self.active_channel = channel;
    }

    pub fn active_channel(&self) -> Option<Channel> {
        self.active_channel
    }

    /// Consumes one wire byte.
    ///
    /// Returns the decoded message if this byte completed one, otherwise
    /// `None`: either the byte started or extended a message still in
    /// progress, or it was absorbed (SysEx payload, undefined byte, stray
    /// data byte).
    pub fn feed_byte(&mut self, byte: u8) -> Option<Message> {
        if byte & STATUS_BIT != 0 {
            self.feed_status(byte)
        } else {
            self.feed_data(byte)
        }
    }

    /// Consumes a slice of wire bytes, invoking `handler` once per completed
    /// message.
    ///
    /// Equivalent to calling [`feed_byte`](Parser::feed_byte) in a loop;
    /// feeding many small slices behaves identically to feeding their
    /// concatenation.
    pub fn feed(&mut self, bytes: &[u8], mut handler: impl FnMut(Message)) {
        for &byte in bytes {
            if let Some(message) = self.feed_byte(byte) {
                handler(message);
            }
        }
    }

    fn feed_status(&mut self, byte: u8) -> Option<Message> {
        let kind = match byte & STATUS_KIND_MASK {
            0x80 => MessageKind::NoteOff,
            0x90 => MessageKind::NoteOn,
            0xA0 => MessageKind::PolyKeyPressure,
            0xB0 => MessageKind::ControlChange,
            0xC0 => MessageKind::ProgramChange,
            0xD0 => MessageKind::ChannelPressure,
            0xE0 => MessageKind::PitchBend,
            _ => return self.feed_system_status(byte),
        };
        // A channel voice status byte never completes a message on its own;
        // it becomes the new running status.
        self.pending = Some(kind);
        self.channel = Channel::from_index(byte & CHANNEL_MASK);
        self.count = 0;
        None
    }

    fn feed_system_status(&mut self, byte: u8) -> Option<Message> {
        match byte {
            // SysEx start both completes and becomes the pending kind, so
            // the payload bytes that follow are absorbed until EOX.
            0xF0 => {
                self.pending = Some(MessageKind::SysExStart);
                self.count = 0;
                Some(Message::SysExStart)
            }

            0xF1 => self.begin_system_common(MessageKind::MtcQuarterFrame),
            0xF2 => self.begin_system_common(MessageKind::SongPositionPointer),
            0xF3 => self.begin_system_common(MessageKind::SongSelect),

            // The only status bytes that clear running status AND complete
            // in the same step.
            0xF6 => {
                self.clear_running_status();
                Some(Message::TuneRequest)
            }
            0xF7 => {
                self.clear_running_status();
                Some(Message::EndOfExclusive)
            }

            // System real-time bytes must not touch any decode state, so an
            // interrupted message (or SysEx block) resumes on the next byte.
            0xF8 => Some(Message::TimingClock),
            0xFA => Some(Message::Start),
            0xFB => Some(Message::Continue),
            0xFC => Some(Message::Stop),
            0xFE => Some(Message::ActiveSense),
            0xFF => Some(Message::SystemReset),

            // 0xF4, 0xF5, 0xF9, 0xFD are undefined. Running status is left
            // intact.
            _ => {
                trace!("ignoring undefined status byte {byte:#04X}");
                None
            }
        }
    }

    /// A system common kind with a data payload: becomes the pending kind
    /// but does not complete yet. System common messages have no channel.
    fn begin_system_common(&mut self, kind: MessageKind) -> Option<Message> {
        self.pending = Some(kind);
        self.channel = None;
        self.count = 0;
        None
    }

    fn clear_running_status(&mut self) {
        self.pending = None;
        self.channel = None;
        self.count = 0;
    }

    fn feed_data(&mut self, byte: u8) -> Option<Message> {
        // Unreachable through feed_byte's dispatch, but guarded: a data byte
        // must fit in 7 bits.
        if byte > MAX_DATA_BYTE {
            trace!("ignoring out-of-range data byte {byte:#04X}");
            return None;
        }

        // Invariant: count stays below the buffer size. A violation means
        // corrupted state; drop the byte and resynchronize.
        if self.count >= BUFFER_SIZE {
            trace!("data byte count out of bounds ({}), resynchronizing", self.count);
            self.count = 0;
            return None;
        }

        let Some(pending) = self.pending else {
            // Data byte with no status seen yet (e.g. joining a stream
            // mid-message).
            trace!("ignoring data byte {byte:#04X} with no message in progress");
            return None;
        };

        match pending {
            MessageKind::NoteOff => {
                let (note, velocity) = self.accumulate_pair(byte)?;
                let channel = self.channel?;
                Some(Message::NoteOff {
                    channel,
                    note,
                    velocity,
                })
            }

            MessageKind::NoteOn => {
                let (note, velocity) = self.accumulate_pair(byte)?;
                let channel = self.channel?;
                // Note On with velocity 0 is Note Off on the wire. Running
                // status stays Note On so later data pairs keep decoding.
                if velocity == 0 {
                    Some(Message::NoteOff {
                        channel,
                        note,
                        velocity,
                    })
                } else {
                    Some(Message::NoteOn {
                        channel,
                        note,
                        velocity,
                    })
                }
            }

            MessageKind::PolyKeyPressure => {
                let (key, pressure) = self.accumulate_pair(byte)?;
                let channel = self.channel?;
                Some(Message::PolyKeyPressure {
                    channel,
                    key,
                    pressure,
                })
            }

            MessageKind::ControlChange => {
                let (number, value) = self.accumulate_pair(byte)?;
                let channel = self.channel?;
                let controller = Controller::from_number(number)?;
                Some(control_change_message(channel, controller, value))
            }

            MessageKind::ProgramChange => {
                self.count = 0;
                let channel = self.channel?;
                Some(Message::ProgramChange {
                    channel,
                    program: byte,
                })
            }

            MessageKind::ChannelPressure => {
                self.count = 0;
                let channel = self.channel?;
                Some(Message::ChannelPressure {
                    channel,
                    pressure: byte,
                })
            }

            MessageKind::PitchBend => {
                let (lsb, msb) = self.accumulate_pair(byte)?;
                let channel = self.channel?;
                Some(Message::PitchBend {
                    channel,
                    bend: combine_14bit(lsb, msb),
                })
            }

            // SysEx payload is opaque and discarded; the block completes
            // only via the EOX status byte.
            MessageKind::SysExStart => None,

            MessageKind::MtcQuarterFrame => {
                self.clear_running_status();
                Some(Message::MtcQuarterFrame {
                    frame_type: byte >> 4,
                    value: byte & 0x0F,
                })
            }

            MessageKind::SongPositionPointer => {
                let (lsb, msb) = self.accumulate_pair(byte)?;
                self.clear_running_status();
                Some(Message::SongPositionPointer {
                    position: combine_14bit(lsb, msb),
                })
            }

            MessageKind::SongSelect => {
                self.clear_running_status();
                Some(Message::SongSelect { song: byte })
            }

            // Completed-message kinds are never set as pending; a data byte
            // routed here has nothing to extend.
            _ => {
                trace!("ignoring data byte {byte:#04X} for non-accumulating kind {pending:?}");
                None
            }
        }
    }

    /// Pushes a data byte into the accumulation buffer. Returns the full
    /// pair once the second byte arrives, resetting the count.
    fn accumulate_pair(&mut self, byte: u8) -> Option<(u8, u8)> {
        self.buffer[self.count as usize] = byte;
        self.count += 1;
        if self.count < BUFFER_SIZE {
            return None;
        }
        self.count = 0;
        Some((self.buffer[0], self.buffer[1]))
    }
}

/// Low 7 bits from the first data byte, high 7 bits from the second.
const fn combine_14bit(lsb: u8, msb: u8) -> u16 {
    (msb as u16) << 7 | lsb as u16
}

/// Controllers 120-127 are channel mode messages and surface as their own
/// message kinds; everything below is a plain Control Change.
fn control_change_message(channel: Channel, controller: Controller, value: u8) -> Message {
    match controller {
        Controller::AllSoundOff => Message::AllSoundOff { channel, value },
        Controller::ResetAllControllers => Message::ResetAllControllers { channel, value },
        Controller::LocalControl => Message::LocalControl { channel, value },
        Controller::AllNotesOff => Message::AllNotesOff { channel, value },
        Controller::OmniOff => Message::OmniOff { channel, value },
        Controller::OmniOn => Message::OmniOn { channel, value },
        Controller::MonoOn => Message::MonoOn { channel, value },
        Controller::PolyOn => Message::PolyOn { channel, value },
        _ => Message::ControlChange {
            channel,
            controller,
            value,
        },
    }
}

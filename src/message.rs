//! Decoded MIDI message types.
//!
//! [`Message`] is the fully-typed result of decoding: one variant per wire
//! message, with the payload fields that message actually carries. Channel
//! mode messages (Control Change with controller 120-127) get their own
//! variants rather than hiding inside [`Message::ControlChange`], so a match
//! on the message is a match on what the sender meant.
//!
//! [`MessageKind`] is the payload-free view of the same tag set, useful for
//! filtering and routing without destructuring.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::controller::Controller;

/// The kind of a [`Message`], without its payload.
///
/// "No message yet" is `Option<MessageKind>::None`, not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    // Channel voice
    NoteOff,
    NoteOn,
    PolyKeyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,

    // Channel mode (Control Change with controller 120-127)
    AllSoundOff,
    ResetAllControllers,
    LocalControl,
    AllNotesOff,
    OmniOff,
    OmniOn,
    MonoOn,
    PolyOn,

    // System exclusive framing
    SysExStart,
    EndOfExclusive,

    // System common
    MtcQuarterFrame,
    SongPositionPointer,
    SongSelect,
    TuneRequest,

    // System real-time
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSense,
    SystemReset,
}

/// A fully-decoded MIDI message.
///
/// 14-bit payloads (pitch bend, song position) are assembled from two data
/// bytes as `msb << 7 | lsb`. SysEx payload bytes are not retained; only the
/// start and end of the exclusive block are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Note released. Also reported for Note On with velocity 0.
    NoteOff {
        channel: Channel,
        note: u8,
        velocity: u8,
    },
    NoteOn {
        channel: Channel,
        note: u8,
        velocity: u8,
    },
    PolyKeyPressure {
        channel: Channel,
        key: u8,
        pressure: u8,
    },
    /// Control Change with an ordinary controller (0-119).
    ControlChange {
        channel: Channel,
        controller: Controller,
        value: u8,
    },
    ProgramChange {
        channel: Channel,
        program: u8,
    },
    ChannelPressure {
        channel: Channel,
        pressure: u8,
    },
    /// 14-bit bend value; 0x2000 is center.
    PitchBend {
        channel: Channel,
        bend: u16,
    },

    AllSoundOff {
        channel: Channel,
        value: u8,
    },
    ResetAllControllers {
        channel: Channel,
        value: u8,
    },
    /// value 0 = local control off, 127 = on.
    LocalControl {
        channel: Channel,
        value: u8,
    },
    AllNotesOff {
        channel: Channel,
        value: u8,
    },
    OmniOff {
        channel: Channel,
        value: u8,
    },
    OmniOn {
        channel: Channel,
        value: u8,
    },
    /// value = number of channels, 0 meaning "as many as voices".
    MonoOn {
        channel: Channel,
        value: u8,
    },
    PolyOn {
        channel: Channel,
        value: u8,
    },

    /// Start of a System Exclusive block. Payload bytes are discarded.
    SysExStart,
    /// End of a System Exclusive block.
    EndOfExclusive,

    MtcQuarterFrame {
        /// Which piece of the timecode this is (high nibble, 0-7).
        frame_type: u8,
        /// The nibble of timecode data (low nibble).
        value: u8,
    },
    /// 14-bit position in MIDI beats (sixteenth notes).
    SongPositionPointer {
        position: u16,
    },
    SongSelect {
        song: u8,
    },
    TuneRequest,

    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSense,
    SystemReset,
}

impl Message {
    /// The payload-free kind of this message.
    pub const fn kind(&self) -> MessageKind {
        match self {
            Message::NoteOff { .. } => MessageKind::NoteOff,
            Message::NoteOn { .. } => MessageKind::NoteOn,
            Message::PolyKeyPressure { .. } => MessageKind::PolyKeyPressure,
            Message::ControlChange { .. } => MessageKind::ControlChange,
            Message::ProgramChange { .. } => MessageKind::ProgramChange,
            Message::ChannelPressure { .. } => MessageKind::ChannelPressure,
            Message::PitchBend { .. } => MessageKind::PitchBend,
            Message::AllSoundOff { .. } => MessageKind::AllSoundOff,
            Message::ResetAllControllers { .. } => MessageKind::ResetAllControllers,
            Message::LocalControl { .. } => MessageKind::LocalControl,
            Message::AllNotesOff { .. } => MessageKind::AllNotesOff,
            Message::OmniOff { .. } => MessageKind::OmniOff,
            Message::OmniOn { .. } => MessageKind::OmniOn,
            Message::MonoOn { .. } => MessageKind::MonoOn,
            Message::PolyOn { .. } => MessageKind::PolyOn,
            Message::SysExStart => MessageKind::SysExStart,
            Message::EndOfExclusive => MessageKind::EndOfExclusive,
            Message::MtcQuarterFrame { .. } => MessageKind::MtcQuarterFrame,
            Message::SongPositionPointer { .. } => MessageKind::SongPositionPointer,
            Message::SongSelect { .. } => MessageKind::SongSelect,
            Message::TuneRequest => MessageKind::TuneRequest,
            Message::TimingClock => MessageKind::TimingClock,
            Message::Start => MessageKind::Start,
            Message::Continue => MessageKind::Continue,
            Message::Stop => MessageKind::Stop,
            Message::ActiveSense => MessageKind::ActiveSense,
            Message::SystemReset => MessageKind::SystemReset,
        }
    }

    /// The channel this message addresses, if it addresses one.
    ///
    /// System messages (common, real-time, SysEx framing) return `None`.
    pub const fn channel(&self) -> Option<Channel> {
        match self {
            Message::NoteOff { channel, .. }
            | Message::NoteOn { channel, .. }
            | Message::PolyKeyPressure { channel, .. }
            | Message::ControlChange { channel, .. }
            | Message::ProgramChange { channel, .. }
            | Message::ChannelPressure { channel, .. }
            | Message::PitchBend { channel, .. }
            | Message::AllSoundOff { channel, .. }
            | Message::ResetAllControllers { channel, .. }
            | Message::LocalControl { channel, .. }
            | Message::AllNotesOff { channel, .. }
            | Message::OmniOff { channel, .. }
            | Message::OmniOn { channel, .. }
            | Message::MonoOn { channel, .. }
            | Message::PolyOn { channel, .. } => Some(*channel),
            _ => None,
        }
    }

    /// The controller this message changes, if it is a Control Change or a
    /// channel mode message (whose controller number is implied by the kind).
    pub const fn controller(&self) -> Option<Controller> {
        match self {
            Message::ControlChange { controller, .. } => Some(*controller),
            Message::AllSoundOff { .. } => Some(Controller::AllSoundOff),
            Message::ResetAllControllers { .. } => Some(Controller::ResetAllControllers),
            Message::LocalControl { .. } => Some(Controller::LocalControl),
            Message::AllNotesOff { .. } => Some(Controller::AllNotesOff),
            Message::OmniOff { .. } => Some(Controller::OmniOff),
            Message::OmniOn { .. } => Some(Controller::OmniOn),
            Message::MonoOn { .. } => Some(Controller::MonoOn),
            Message::PolyOn { .. } => Some(Controller::PolyOn),
            _ => None,
        }
    }

    #[inline]
    pub fn is_note_on(&self) -> bool {
        matches!(self, Message::NoteOn { velocity, .. } if *velocity > 0)
    }

    #[inline]
    pub fn is_note_off(&self) -> bool {
        matches!(
            self,
            Message::NoteOff { .. } | Message::NoteOn { velocity: 0, .. }
        )
    }

    #[inline]
    pub fn is_channel_voice(&self) -> bool {
        matches!(
            self,
            Message::NoteOff { .. }
                | Message::NoteOn { .. }
                | Message::PolyKeyPressure { .. }
                | Message::ControlChange { .. }
                | Message::ProgramChange { .. }
                | Message::ChannelPressure { .. }
                | Message::PitchBend { .. }
        )
    }

    #[inline]
    pub fn is_channel_mode(&self) -> bool {
        matches!(
            self,
            Message::AllSoundOff { .. }
                | Message::ResetAllControllers { .. }
                | Message::LocalControl { .. }
                | Message::AllNotesOff { .. }
                | Message::OmniOff { .. }
                | Message::OmniOn { .. }
                | Message::MonoOn { .. }
                | Message::PolyOn { .. }
        )
    }

    #[inline]
    pub fn is_system_common(&self) -> bool {
        matches!(
            self,
            Message::MtcQuarterFrame { .. }
                | Message::SongPositionPointer { .. }
                | Message::SongSelect { .. }
                | Message::TuneRequest
                | Message::EndOfExclusive
        )
    }

    #[inline]
    pub fn is_system_real_time(&self) -> bool {
        matches!(
            self,
            Message::TimingClock
                | Message::Start
                | Message::Continue
                | Message::Stop
                | Message::ActiveSense
                | Message::SystemReset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_channel() {
        let msg = Message::NoteOn {
            channel: Channel::Ch3,
            note: 60,
            velocity: 100,
        };
        assert_eq!(msg.kind(), MessageKind::NoteOn);
        assert_eq!(msg.channel(), Some(Channel::Ch3));

        assert_eq!(Message::TimingClock.kind(), MessageKind::TimingClock);
        assert_eq!(Message::TimingClock.channel(), None);
        assert_eq!(Message::SysExStart.channel(), None);
    }

    #[test]
    fn test_note_on_zero_velocity_is_note_off() {
        let msg = Message::NoteOn {
            channel: Channel::Ch1,
            note: 60,
            velocity: 0,
        };
        assert!(msg.is_note_off());
        assert!(!msg.is_note_on());
    }

    #[test]
    fn test_category_helpers() {
        let cc = Message::ControlChange {
            channel: Channel::Ch1,
            controller: Controller::ModWheel,
            value: 64,
        };
        assert!(cc.is_channel_voice());
        assert!(!cc.is_channel_mode());

        let mode = Message::AllNotesOff {
            channel: Channel::Ch1,
            value: 0,
        };
        assert!(mode.is_channel_mode());
        assert!(!mode.is_channel_voice());

        assert!(Message::ActiveSense.is_system_real_time());
        assert!(Message::TuneRequest.is_system_common());
        assert!(Message::EndOfExclusive.is_system_common());
        assert!(!Message::SysExStart.is_system_common());
    }

    #[test]
    fn test_implied_controller_of_mode_messages() {
        let mode = Message::LocalControl {
            channel: Channel::Ch5,
            value: 127,
        };
        assert_eq!(mode.controller(), Some(Controller::LocalControl));
        assert_eq!(mode.channel(), Some(Channel::Ch5));

        let cc = Message::ControlChange {
            channel: Channel::Ch5,
            controller: Controller::Pan,
            value: 64,
        };
        assert_eq!(cc.controller(), Some(Controller::Pan));
        assert_eq!(Message::TuneRequest.controller(), None);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let messages = vec![
            Message::NoteOn {
                channel: Channel::Ch1,
                note: 60,
                velocity: 100,
            },
            Message::PitchBend {
                channel: Channel::Ch16,
                bend: 0x2000,
            },
            Message::AllSoundOff {
                channel: Channel::Ch2,
                value: 0,
            },
            Message::MtcQuarterFrame {
                frame_type: 3,
                value: 9,
            },
            Message::SongPositionPointer { position: 16383 },
            Message::TimingClock,
        ];

        let serialized = bincode::serialize(&messages).unwrap();
        let deserialized: Vec<Message> = bincode::deserialize(&serialized).unwrap();
        assert_eq!(messages, deserialized);
    }
}

//! MIDI controller numbers.
//!
//! Control Change messages carry a controller number (0-127). The MIDI 1.0
//! spec names most of them; the rest are reserved. Numbers 120-127 are not
//! ordinary controllers at all: they are the channel mode messages, which
//! the parser reports as dedicated [`Message`](crate::Message) kinds.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A MIDI controller number, 0-127.
///
/// Every wire value maps to a variant, including the reserved `Undefined*`
/// numbers, so conversion from a data byte is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Controller {
    // Continuous controllers, MSB (0-31)
    BankSelect = 0,
    ModWheel = 1,
    BreathController = 2,
    Undefined3 = 3,
    FootController = 4,
    PortamentoTime = 5,
    DataEntryMsb = 6,
    ChannelVolume = 7,
    Balance = 8,
    Undefined9 = 9,
    Pan = 10,
    Expression = 11,
    EffectControl1 = 12,
    EffectControl2 = 13,
    Undefined14 = 14,
    Undefined15 = 15,
    GeneralPurpose1 = 16,
    GeneralPurpose2 = 17,
    GeneralPurpose3 = 18,
    GeneralPurpose4 = 19,
    Undefined20 = 20,
    Undefined21 = 21,
    Undefined22 = 22,
    Undefined23 = 23,
    Undefined24 = 24,
    Undefined25 = 25,
    Undefined26 = 26,
    Undefined27 = 27,
    Undefined28 = 28,
    Undefined29 = 29,
    Undefined30 = 30,
    Undefined31 = 31,

    // Continuous controllers, LSB (32-63)
    BankSelectLsb = 32,
    ModWheelLsb = 33,
    BreathControllerLsb = 34,
    Undefined35 = 35,
    FootControllerLsb = 36,
    PortamentoTimeLsb = 37,
    DataEntryLsb = 38,
    ChannelVolumeLsb = 39,
    BalanceLsb = 40,
    Undefined41 = 41,
    PanLsb = 42,
    ExpressionLsb = 43,
    EffectControl1Lsb = 44,
    EffectControl2Lsb = 45,
    Undefined46 = 46,
    Undefined47 = 47,
    GeneralPurpose1Lsb = 48,
    GeneralPurpose2Lsb = 49,
    GeneralPurpose3Lsb = 50,
    GeneralPurpose4Lsb = 51,
    Undefined52 = 52,
    Undefined53 = 53,
    Undefined54 = 54,
    Undefined55 = 55,
    Undefined56 = 56,
    Undefined57 = 57,
    Undefined58 = 58,
    Undefined59 = 59,
    Undefined60 = 60,
    Undefined61 = 61,
    Undefined62 = 62,
    Undefined63 = 63,

    // Switches (64-69)
    SustainPedal = 64,
    Portamento = 65,
    Sostenuto = 66,
    SoftPedal = 67,
    LegatoFootswitch = 68,
    Hold2 = 69,

    // Sound controllers (70-79)
    SoundVariation = 70,
    Timbre = 71,
    ReleaseTime = 72,
    AttackTime = 73,
    Brightness = 74,
    SoundController6 = 75,
    SoundController7 = 76,
    SoundController8 = 77,
    SoundController9 = 78,
    SoundController10 = 79,

    // General purpose and portamento (80-84)
    GeneralPurpose5 = 80,
    GeneralPurpose6 = 81,
    GeneralPurpose7 = 82,
    GeneralPurpose8 = 83,
    PortamentoControl = 84,

    Undefined85 = 85,
    Undefined86 = 86,
    Undefined87 = 87,
    Undefined88 = 88,
    Undefined89 = 89,
    Undefined90 = 90,

    // Effect depths (91-95)
    Effect1Depth = 91,
    Effect2Depth = 92,
    Effect3Depth = 93,
    Effect4Depth = 94,
    Effect5Depth = 95,

    // Data entry increment/decrement and (N)RPN (96-101)
    DataIncrement = 96,
    DataDecrement = 97,
    NrpnLsb = 98,
    NrpnMsb = 99,
    RpnLsb = 100,
    RpnMsb = 101,

    Undefined102 = 102,
    Undefined103 = 103,
    Undefined104 = 104,
    Undefined105 = 105,
    Undefined106 = 106,
    Undefined107 = 107,
    Undefined108 = 108,
    Undefined109 = 109,
    Undefined110 = 110,
    Undefined111 = 111,
    Undefined112 = 112,
    Undefined113 = 113,
    Undefined114 = 114,
    Undefined115 = 115,
    Undefined116 = 116,
    Undefined117 = 117,
    Undefined118 = 118,
    Undefined119 = 119,

    // Channel mode messages (120-127)
    AllSoundOff = 120,
    ResetAllControllers = 121,
    LocalControl = 122,
    AllNotesOff = 123,
    OmniOff = 124,
    OmniOn = 125,
    MonoOn = 126,
    PolyOn = 127,
}

impl Controller {
    /// Returns `None` if the value is > 127.
    pub const fn from_number(number: u8) -> Option<Controller> {
        if number > 127 {
            return None;
        }
        // SAFETY: repr(u8) enum with all values 0-127 defined
        Some(unsafe { core::mem::transmute::<u8, Controller>(number) })
    }

    /// Wire value, 0-127.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// True for the reserved channel mode range (120-127).
    pub const fn is_channel_mode(self) -> bool {
        self as u8 >= Controller::AllSoundOff as u8
    }
}

impl From<Controller> for u8 {
    fn from(controller: Controller) -> u8 {
        controller as u8
    }
}

impl TryFrom<u8> for Controller {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Controller::from_number(number).ok_or(Error::InvalidController(number))
    }
}

//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::fmt::{Display, Formatter, Result};

/// An operating mode of the radio core.
///
/// The discriminant doubles as the chip's RFST strobe byte, so the same
/// value selects a mode over the control channel and strobes the radio
/// directly through the RFST register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioMode {
    /// Frequency synthesizer on, ready to transmit.
    FstxOn,
    /// Calibrate the frequency synthesizer, then return.
    Cal,
    /// Receive.
    Rx,
    /// Transmit.
    Tx,
    /// Idle; the only mode in which configuration registers are
    /// safely writable.
    Idle,
}

impl RadioMode {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            RadioMode::FstxOn => 0x00,
            RadioMode::Cal => 0x01,
            RadioMode::Rx => 0x02,
            RadioMode::Tx => 0x03,
            RadioMode::Idle => 0x04,
        }
    }
}

impl Display for RadioMode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            RadioMode::FstxOn => write!(f, "FSTXON"),
            RadioMode::Cal => write!(f, "CAL"),
            RadioMode::Rx => write!(f, "RX"),
            RadioMode::Tx => write!(f, "TX"),
            RadioMode::Idle => write!(f, "IDLE"),
        }
    }
}

/// The radio main control state machine's current state, as reported by
/// the MARCSTATE status register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarcState {
    Sleep,
    Idle,
    XOff,
    VcoOnMc,
    RegOnMc,
    ManCal,
    VcoOn,
    RegOn,
    StartCal,
    BwBoost,
    FsLock,
    IfadcOn,
    EndCal,
    Rx,
    RxEnd,
    RxRst,
    TxRxSwitch,
    RxOverflow,
    FstxOn,
    Tx,
    TxEnd,
    RxTxSwitch,
    TxUnderflow,
    /// A value outside the documented state range.
    Unknown(u8),
}

impl MarcState {
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0x00 => MarcState::Sleep,
            0x01 => MarcState::Idle,
            0x02 => MarcState::XOff,
            0x03 => MarcState::VcoOnMc,
            0x04 => MarcState::RegOnMc,
            0x05 => MarcState::ManCal,
            0x06 => MarcState::VcoOn,
            0x07 => MarcState::RegOn,
            0x08 => MarcState::StartCal,
            0x09 => MarcState::BwBoost,
            0x0A => MarcState::FsLock,
            0x0B => MarcState::IfadcOn,
            0x0C => MarcState::EndCal,
            0x0D => MarcState::Rx,
            0x0E => MarcState::RxEnd,
            0x0F => MarcState::RxRst,
            0x10 => MarcState::TxRxSwitch,
            0x11 => MarcState::RxOverflow,
            0x12 => MarcState::FstxOn,
            0x13 => MarcState::Tx,
            0x14 => MarcState::TxEnd,
            0x15 => MarcState::RxTxSwitch,
            0x16 => MarcState::TxUnderflow,
            other => MarcState::Unknown(other),
        }
    }
}

impl Display for MarcState {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            MarcState::Sleep => write!(f, "MARC_STATE_SLEEP"),
            MarcState::Idle => write!(f, "MARC_STATE_IDLE"),
            MarcState::XOff => write!(f, "MARC_STATE_XOFF"),
            MarcState::VcoOnMc => write!(f, "MARC_STATE_VCOON_MC"),
            MarcState::RegOnMc => write!(f, "MARC_STATE_REGON_MC"),
            MarcState::ManCal => write!(f, "MARC_STATE_MANCAL"),
            MarcState::VcoOn => write!(f, "MARC_STATE_VCOON"),
            MarcState::RegOn => write!(f, "MARC_STATE_REGON"),
            MarcState::StartCal => write!(f, "MARC_STATE_STARTCAL"),
            MarcState::BwBoost => write!(f, "MARC_STATE_BWBOOST"),
            MarcState::FsLock => write!(f, "MARC_STATE_FS_LOCK"),
            MarcState::IfadcOn => write!(f, "MARC_STATE_IFADCON"),
            MarcState::EndCal => write!(f, "MARC_STATE_ENDCAL"),
            MarcState::Rx => write!(f, "MARC_STATE_RX"),
            MarcState::RxEnd => write!(f, "MARC_STATE_RX_END"),
            MarcState::RxRst => write!(f, "MARC_STATE_RX_RST"),
            MarcState::TxRxSwitch => write!(f, "MARC_STATE_TXRX_SWITCH"),
            MarcState::RxOverflow => write!(f, "MARC_STATE_RX_OVERFLOW"),
            MarcState::FstxOn => write!(f, "MARC_STATE_FSTXON"),
            MarcState::Tx => write!(f, "MARC_STATE_TX"),
            MarcState::TxEnd => write!(f, "MARC_STATE_TX_END"),
            MarcState::RxTxSwitch => write!(f, "MARC_STATE_RXTX_SWITCH"),
            MarcState::TxUnderflow => write!(f, "MARC_STATE_TX_UNDERFLOW"),
            MarcState::Unknown(v) => write!(f, "MARC_STATE_({v:#04x})"),
        }
    }
}

/// The modulation format of the transceiver, as kept in the MOD_FORMAT
/// field of MDMCFG2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modulation {
    /// Binary frequency-shift keying.
    Fsk2,
    /// Gaussian-filtered FSK.
    Gfsk,
    /// Amplitude-shift / on-off keying.
    AskOok,
    /// Minimum-shift keying.
    Msk,
}

impl Modulation {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Modulation::Fsk2 => 0,
            Modulation::Gfsk => 1,
            Modulation::AskOok => 3,
            Modulation::Msk => 7,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            1 => Modulation::Gfsk,
            3 => Modulation::AskOok,
            7 => Modulation::Msk,
            _ => Modulation::Fsk2,
        }
    }
}

impl Display for Modulation {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Modulation::Fsk2 => write!(f, "2FSK"),
            Modulation::Gfsk => write!(f, "GFSK"),
            Modulation::AskOok => write!(f, "ASK/OOK"),
            Modulation::Msk => write!(f, "MSK"),
        }
    }
}

/// How strictly the receiver qualifies incoming carrier as a packet start,
/// as kept in the SYNC_MODE field of MDMCFG2.
///
/// Higher variants require more of the 16-bit sync word to match and/or a
/// carrier-sense assertion before a packet is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncMode {
    /// No sync word; everything the demodulator produces is data.
    None,
    /// 15 of 16 sync word bits must match.
    Bits15Of16,
    /// All 16 sync word bits must match.
    Bits16Of16,
    /// 30 of 32 bits of a doubled sync word must match.
    Bits30Of32,
    /// Carrier sense only, no sync word match required.
    Carrier,
    /// Carrier sense plus 15 of 16 sync word bits.
    CarrierBits15Of16,
    /// Carrier sense plus all 16 sync word bits.
    CarrierBits16Of16,
    /// Carrier sense plus 30 of 32 bits of a doubled sync word.
    CarrierBits30Of32,
}

impl SyncMode {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            SyncMode::None => 0,
            SyncMode::Bits15Of16 => 1,
            SyncMode::Bits16Of16 => 2,
            SyncMode::Bits30Of32 => 3,
            SyncMode::Carrier => 4,
            SyncMode::CarrierBits15Of16 => 5,
            SyncMode::CarrierBits16Of16 => 6,
            SyncMode::CarrierBits30Of32 => 7,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 7 {
            1 => SyncMode::Bits15Of16,
            2 => SyncMode::Bits16Of16,
            3 => SyncMode::Bits30Of32,
            4 => SyncMode::Carrier,
            5 => SyncMode::CarrierBits15Of16,
            6 => SyncMode::CarrierBits16Of16,
            7 => SyncMode::CarrierBits30Of32,
            _ => SyncMode::None,
        }
    }
}

impl Display for SyncMode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SyncMode::None => write!(f, "no sync"),
            SyncMode::Bits15Of16 => write!(f, "15/16 sync bits"),
            SyncMode::Bits16Of16 => write!(f, "16/16 sync bits"),
            SyncMode::Bits30Of32 => write!(f, "30/32 sync bits"),
            SyncMode::Carrier => write!(f, "carrier"),
            SyncMode::CarrierBits15Of16 => write!(f, "carrier + 15/16 sync bits"),
            SyncMode::CarrierBits16Of16 => write!(f, "carrier + 16/16 sync bits"),
            SyncMode::CarrierBits30Of32 => write!(f, "carrier + 30/32 sync bits"),
        }
    }
}

/// Status byte returned by the dongle for each transfer transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceStatus {
    /// The transaction was accepted.
    NoError,
    /// The radio dropped the packet mid-air.
    DroppedPacket,
    /// Generic transmit failure.
    TxError,
    /// The requested block does not fit the current radio buffering.
    BlockSizeIncompat,
    /// The radio is in a mode that cannot service the request.
    ModeIncompat,
    /// The device-side chunk buffer is momentarily full; resend the
    /// same chunk.
    BufferNotAvailable,
    /// The request exceeds the device buffer outright.
    BufferSizeExceeded,
    /// A status byte outside the documented set.
    Other(u8),
}

impl DeviceStatus {
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0x00 => DeviceStatus::NoError,
            0xEC => DeviceStatus::DroppedPacket,
            0xED => DeviceStatus::TxError,
            0xEE => DeviceStatus::BlockSizeIncompat,
            0xEF => DeviceStatus::ModeIncompat,
            0xFE => DeviceStatus::BufferNotAvailable,
            0xFF => DeviceStatus::BufferSizeExceeded,
            other => DeviceStatus::Other(other),
        }
    }

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DeviceStatus::NoError => 0x00,
            DeviceStatus::DroppedPacket => 0xEC,
            DeviceStatus::TxError => 0xED,
            DeviceStatus::BlockSizeIncompat => 0xEE,
            DeviceStatus::ModeIncompat => 0xEF,
            DeviceStatus::BufferNotAvailable => 0xFE,
            DeviceStatus::BufferSizeExceeded => 0xFF,
            DeviceStatus::Other(v) => v,
        }
    }
}

impl Display for DeviceStatus {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DeviceStatus::NoError => write!(f, "no error"),
            DeviceStatus::DroppedPacket => write!(f, "dropped packet"),
            DeviceStatus::TxError => write!(f, "transmit error"),
            DeviceStatus::BlockSizeIncompat => write!(f, "block size incompatible"),
            DeviceStatus::ModeIncompat => write!(f, "radio mode incompatible"),
            DeviceStatus::BufferNotAvailable => write!(f, "buffer not yet available"),
            DeviceStatus::BufferSizeExceeded => write!(f, "buffer size exceeded"),
            DeviceStatus::Other(_) => write!(f, "status {:#04x}", self.into_bits()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DeviceStatus, MarcState, Modulation, RadioMode, SyncMode};

    #[test]
    fn mode_strobe_values() {
        assert_eq!(RadioMode::FstxOn.into_bits(), 0x00);
        assert_eq!(RadioMode::Cal.into_bits(), 0x01);
        assert_eq!(RadioMode::Rx.into_bits(), 0x02);
        assert_eq!(RadioMode::Tx.into_bits(), 0x03);
        assert_eq!(RadioMode::Idle.into_bits(), 0x04);
    }

    #[test]
    fn marc_state_round_trip() {
        assert_eq!(MarcState::from_bits(0x01), MarcState::Idle);
        assert_eq!(MarcState::from_bits(0x0D), MarcState::Rx);
        assert_eq!(MarcState::from_bits(0x13), MarcState::Tx);
        assert_eq!(MarcState::from_bits(0x42), MarcState::Unknown(0x42));
    }

    #[test]
    fn modulation_bits() {
        for modulation in [
            Modulation::Fsk2,
            Modulation::Gfsk,
            Modulation::AskOok,
            Modulation::Msk,
        ] {
            assert_eq!(Modulation::from_bits(modulation.into_bits()), modulation);
        }
    }

    #[test]
    fn sync_mode_bits() {
        for value in 0..8 {
            assert_eq!(SyncMode::from_bits(value).into_bits(), value);
        }
    }

    #[test]
    fn device_status_bits() {
        assert_eq!(DeviceStatus::from_bits(0xFE), DeviceStatus::BufferNotAvailable);
        assert_eq!(DeviceStatus::from_bits(0xEC), DeviceStatus::DroppedPacket);
        assert_eq!(DeviceStatus::from_bits(0x17), DeviceStatus::Other(0x17));
        assert_eq!(DeviceStatus::Other(0x17).into_bits(), 0x17);
    }

    #[test]
    fn display_sync_mode() {
        assert_eq!(
            format!("{}", SyncMode::CarrierBits16Of16),
            "carrier + 16/16 sync bits"
        );
    }
}
